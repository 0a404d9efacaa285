use async_trait::async_trait;

use crate::models::{ApiError, Attachment, ContactResponse, ContactSubmission, GalleryItem, Reference};

/// Queries against the content API
///
/// Every failure, including transport errors, is reported as an [`ApiError`].
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// `GET /api/references[?industry=]`
    async fn list_references(&self, industry: Option<&str>) -> Result<Vec<Reference>, ApiError>;

    /// `GET /api/gallery[?category=]`
    async fn list_gallery(&self, category: Option<&str>) -> Result<Vec<GalleryItem>, ApiError>;

    /// `GET /api/gallery/{id}`; a 404 is `Ok(None)`
    async fn get_gallery_item(&self, id: &str) -> Result<Option<GalleryItem>, ApiError>;

    /// `POST /api/contact` as multipart/form-data
    async fn submit_contact(
        &self,
        submission: &ContactSubmission,
        attachment: Option<Attachment>,
    ) -> Result<ContactResponse, ApiError>;

    /// Base URL, used to resolve relative image paths
    fn base_url(&self) -> &str;
}
