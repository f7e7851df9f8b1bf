//! HTTP client for the menu API.
//!
//! A thin wrapper over `reqwest`: it resolves paths against the configured
//! base URL, attaches the bearer token read from the [`TokenSource`] on every
//! request, and maps transport failures, non-2xx answers and undecodable
//! bodies to [`ApiError`]. There is no retry or backoff.

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::payload::Payload;
use super::session::TokenSource;

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    base_url: String,
    http: reqwest::Client,
    tokens: Arc<dyn TokenSource>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>) -> Self {
        Self::with_http(base_url, tokens, reqwest::Client::new())
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_http(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenSource>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                base_url: normalize_base_url(&base_url.into()),
                http,
                tokens,
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Builds the absolute URL for an API path such as `/api/restaurants/`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.inner.base_url, path)
        } else {
            format!("{}/{}", self.inner.base_url, path)
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.execute(self.request(Method::GET, &url), "GET", &url).await?;
        decode(response, &url).await
    }

    /// Sends `payload` with `method` (POST or PUT) and decodes the response.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let builder = self.request(method.clone(), &url);
        let builder = match payload {
            Payload::Json(value) => builder.json(&value),
            Payload::Multipart(form) => builder.multipart(form.into_form()?),
        };
        let response = self.execute(builder, method.as_str(), &url).await?;
        decode(response, &url).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        self.execute(self.request(Method::DELETE, &url), "DELETE", &url)
            .await?;
        Ok(())
    }

    /// Downloads a binary body (PDF, PNG).
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.url(path);
        let response = self.execute(self.request(Method::GET, &url), "GET", &url).await?;
        let bytes = response.bytes().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.inner.http.request(method, url);
        match self.inner.tokens.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(
        &self,
        builder: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<Response, ApiError> {
        tracing::debug!("{} {}", method, url);

        let response = builder.send().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                method: method.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
    let bytes = response.bytes().await.map_err(|e| ApiError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Adds a scheme to bare hosts and drops trailing slashes.
fn normalize_base_url(base_url: &str) -> String {
    let base_url = base_url.trim();
    let with_scheme = if base_url.starts_with("http://") || base_url.starts_with("https://") {
        base_url.to_string()
    } else {
        format!("http://{}", base_url)
    };
    with_scheme.trim_end_matches('/').to_string()
}
