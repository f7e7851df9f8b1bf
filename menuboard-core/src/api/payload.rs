use reqwest::multipart::{Form, Part};
use serde::Serialize;

use super::ApiError;
use crate::models::Upload;

/// A request body, either JSON or multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Multipart(FormData),
}

impl Payload {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Payload::Json)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }
}

/// Converts a typed create/update record into the body sent to the API.
pub trait IntoPayload {
    fn into_payload(self) -> Result<Payload, ApiError>;
}

/// Text fields and file parts of a multipart body, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: Vec<(String, String)>,
    files: Vec<(String, Upload)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, upload: Upload) -> Self {
        self.files.push((name.into(), upload));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn files(&self) -> &[(String, Upload)] {
        &self.files
    }

    pub(crate) fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for (name, upload) in self.files {
            let part = Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.mime)
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
            form = form.part(name, part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_data_lookup() {
        let form = FormData::new()
            .text("name", "Soup")
            .text("price", "5.00")
            .file("image", Upload::new("soup.jpg", "image/jpeg", vec![0xff]));

        assert_eq!(form.field("name"), Some("Soup"));
        assert_eq!(form.field("missing"), None);
        assert_eq!(form.files()[0].0, "image");
        assert!(form.into_form().is_ok());
    }

    #[test]
    fn test_invalid_mime_is_rejected() {
        let form = FormData::new().file("image", Upload::new("x", "not a mime", vec![]));
        assert!(matches!(
            form.into_form(),
            Err(ApiError::InvalidRequest(_))
        ));
    }
}
