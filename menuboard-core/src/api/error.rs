//! API error types.

use thiserror::Error;

/// A remote call failed.
///
/// Callers treat every variant the same way; the variants only carry enough
/// detail to produce a useful log line and notice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{method} {url} returned status {status}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status {
            method: "DELETE".to_string(),
            url: "http://localhost/api/menu-items/1/".to_string(),
            status: 404,
            body: "{\"detail\":\"Not found.\"}".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("DELETE"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = ApiError::Transport {
            url: "http://localhost".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
    }
}
