//! reqwest-backed content API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use super::{CONTACT_PATH, ContentApi, GALLERY_PATH, REFERENCES_PATH};
use crate::config::ApiConfig;
use crate::errors::{Result, SiteError};
use crate::models::{
    ApiError, Attachment, ContactResponse, ContactSubmission, GalleryItem, Reference,
};

pub struct HttpContentApi {
    client: Client,
    base_url: String,
}

impl HttpContentApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("emasmetal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SiteError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<T, ApiError> {
        trace!("GET {}{} {:?}", self.base_url, path, query);

        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!("Content API request to \"{}\" failed: {}", path, e);
                ApiError::network(e.to_string(), path)
            })?;

        Self::read_json(response, path).await
    }

    /// Decode a success body, or turn an error response into an [`ApiError`]
    async fn read_json<T: DeserializeOwned>(
        response: Response,
        path: &str,
    ) -> std::result::Result<T, ApiError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(e.to_string(), path))?;

        if !status.is_success() {
            debug!("Content API {} answered {}", path, status);
            return Err(serde_json::from_slice::<ApiError>(&body)
                .unwrap_or_else(|_| ApiError::from_status(status.as_u16(), path)));
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Content API response from \"{}\" parse failed: {}", path, e);
            ApiError {
                error: "Invalid Response".to_string(),
                message: e.to_string(),
                ..ApiError::from_status(status.as_u16(), path)
            }
        })
    }

    fn contact_form(
        submission: &ContactSubmission,
        attachment: Option<Attachment>,
    ) -> std::result::Result<Form, ApiError> {
        let json = serde_json::to_string(submission)
            .map_err(|e| ApiError::network(e.to_string(), CONTACT_PATH))?;
        let data = Part::text(json)
            .mime_str("application/json")
            .map_err(|e| ApiError::network(e.to_string(), CONTACT_PATH))?;

        let mut form = Form::new().part("data", data);

        if let Some(att) = attachment {
            let filename = att.filename.clone();
            let part = Part::bytes(att.data.to_vec()).file_name(filename);
            let part = match part.mime_str(&att.content_type) {
                Ok(p) => p,
                Err(_) => Part::bytes(att.data.to_vec())
                    .file_name(att.filename)
                    .mime_str("application/octet-stream")
                    .map_err(|e| ApiError::network(e.to_string(), CONTACT_PATH))?,
            };
            form = form.part("attachment", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn list_references(
        &self,
        industry: Option<&str>,
    ) -> std::result::Result<Vec<Reference>, ApiError> {
        match industry {
            Some(industry) => {
                self.get_json(REFERENCES_PATH, &[("industry", industry)])
                    .await
            }
            None => self.get_json(REFERENCES_PATH, &[]).await,
        }
    }

    async fn list_gallery(
        &self,
        category: Option<&str>,
    ) -> std::result::Result<Vec<GalleryItem>, ApiError> {
        match category {
            Some(category) => self.get_json(GALLERY_PATH, &[("category", category)]).await,
            None => self.get_json(GALLERY_PATH, &[]).await,
        }
    }

    async fn get_gallery_item(
        &self,
        id: &str,
    ) -> std::result::Result<Option<GalleryItem>, ApiError> {
        let path = format!("{}/{}", GALLERY_PATH, urlencoding::encode(id));
        match self.get_json::<GalleryItem>(&path, &[]).await {
            Ok(item) => Ok(Some(item)),
            Err(e) if e.status == 404 => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn submit_contact(
        &self,
        submission: &ContactSubmission,
        attachment: Option<Attachment>,
    ) -> std::result::Result<ContactResponse, ApiError> {
        let has_attachment = attachment.is_some();
        let form = Self::contact_form(submission, attachment)?;

        debug!("Submitting contact message (attachment: {})", has_attachment);

        let response = self
            .client
            .post(self.url(CONTACT_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Contact submission failed: {}", e);
                ApiError::network(e.to_string(), CONTACT_PATH)
            })?;

        Self::read_json(response, CONTACT_PATH).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
