//! Content records exchanged with the content API
//!
//! Field names follow the API's camelCase JSON. Everything except the
//! identifiers and display names is optional because the API and the
//! fallback lists leave them out freely.

pub mod certificates;
pub mod fallback;

use serde::{Deserialize, Serialize};

pub use certificates::{CERTIFICATES, Certificate};

/// A client company shown as a logo card on the references page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An image record tagged with a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The JSON `data` part of a contact submission
///
/// Optional fields that are blank are skipped during serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

/// A file attached to a contact submission
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub data: bytes::Bytes,
}

impl Attachment {
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Lowercased extension without the dot, if any
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub reference_id: Option<String>,
}

/// Error body returned by the content API
///
/// Network failures are turned into the same shape so callers only ever
/// deal with one error type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    /// Set when the error was built locally instead of decoded from the API
    #[serde(skip)]
    pub synthesized: bool,
}

impl ApiError {
    /// Synthesize the error for a request that never produced a response
    pub fn network(message: impl Into<String>, path: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: 500,
            error: "Network Error".to_string(),
            message: if message.is_empty() {
                "An unexpected error occurred".to_string()
            } else {
                message
            },
            path: path.into(),
            synthesized: true,
        }
    }

    /// Synthesize the error for a response whose body was not an `ApiError`
    pub fn from_status(status: u16, path: impl Into<String>) -> Self {
        let reason = actix_web::http::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Error");
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status,
            error: reason.to_string(),
            message: format!("Request failed with status code {}", status),
            path: path.into(),
            synthesized: true,
        }
    }

    /// The message is client-side English text, not something the API said
    pub fn is_synthesized(&self) -> bool {
        self.synthesized
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({}): {}", self.status, self.error, self.path, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_deserializes_camel_case() {
        let json = r#"{
            "id": "b1",
            "name": "Siemens Energy",
            "logoUrl": "/uploads/siemens.png",
            "websiteUrl": "https://siemens-energy.com",
            "displayOrder": 2
        }"#;
        let r: Reference = serde_json::from_str(json).unwrap();
        assert_eq!(r.logo_url.as_deref(), Some("/uploads/siemens.png"));
        assert_eq!(r.display_order, Some(2));
        assert!(r.industry.is_none());
    }

    #[test]
    fn test_submission_skips_missing_optionals() {
        let s = ContactSubmission {
            name: "Ada".into(),
            company: None,
            email: "ada@example.com".into(),
            phone: None,
            message: "Need 40 flanges".into(),
        };
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("company").is_none());
        assert!(json.get("phone").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn test_network_error_shape() {
        let err = ApiError::network("", "/api/gallery");
        assert_eq!(err.status, 500);
        assert_eq!(err.error, "Network Error");
        assert_eq!(err.message, "An unexpected error occurred");
        assert_eq!(err.path, "/api/gallery");
        assert!(chrono::DateTime::parse_from_rfc3339(&err.timestamp).is_ok());
        assert!(err.is_synthesized());
    }

    #[test]
    fn test_decoded_error_is_not_synthesized() {
        let json = r#"{
            "timestamp": "2024-05-01T10:00:00Z",
            "status": 400,
            "error": "Bad Request",
            "message": "Dosya türü desteklenmiyor",
            "path": "/api/contact"
        }"#;
        let err: ApiError = serde_json::from_str(json).unwrap();
        assert!(!err.is_synthesized());
        assert!(ApiError::from_status(502, "/api/contact").is_synthesized());
        assert!(serde_json::to_value(&err).unwrap().get("synthesized").is_none());
    }

    #[test]
    fn test_attachment_extension_is_lowercased() {
        let a = Attachment {
            filename: "Drawing.STEP".into(),
            content_type: "application/octet-stream".into(),
            data: bytes::Bytes::from_static(b"ISO-10303"),
        };
        assert_eq!(a.extension().as_deref(), Some("step"));
        assert_eq!(a.size(), 9);
    }
}
