//! Listings for the references and gallery pages
//!
//! API results are cached for `api.cache_ttl_secs`. When the API fails or
//! returns nothing, the static fallback lists are served instead so the
//! pages stay usable; fallbacks are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, warn};

use crate::client::ContentApi;
use crate::config::ApiConfig;
use crate::models::fallback::{fallback_gallery, fallback_references};
use crate::models::{GalleryItem, Reference};
use crate::utils::image_url;

/// Where a listing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Api,
    Cache,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Arc<Vec<T>>,
    pub source: ContentSource,
}

impl<T> Listing<T> {
    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::Fallback
    }
}

/// `None` when caching is disabled with a zero TTL
fn build_cache<V>(config: &ApiConfig) -> Option<Cache<String, V>>
where
    V: Clone + Send + Sync + 'static,
{
    (config.cache_ttl_secs > 0).then(|| {
        Cache::builder()
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .max_capacity(config.cache_capacity)
            .build()
    })
}

pub struct ContentService {
    api: Arc<dyn ContentApi>,
    references: Option<Cache<String, Arc<Vec<Reference>>>>,
    gallery: Option<Cache<String, Arc<Vec<GalleryItem>>>>,
}

impl ContentService {
    pub fn new(api: Arc<dyn ContentApi>, config: &ApiConfig) -> Self {
        Self {
            api,
            references: build_cache(config),
            gallery: build_cache(config),
        }
    }

    /// Resolve an image path against the API base URL
    pub fn image_url(&self, path: Option<&str>) -> String {
        image_url(self.api.base_url(), path.unwrap_or_default())
    }

    pub async fn references(&self, industry: Option<&str>) -> Listing<Reference> {
        let key = industry.unwrap_or_default().to_string();

        if let Some(cache) = &self.references
            && let Some(items) = cache.get(&key).await
        {
            debug!("References served from cache (industry={:?})", industry);
            return Listing {
                items,
                source: ContentSource::Cache,
            };
        }

        match self.api.list_references(industry).await {
            Ok(items) if !items.is_empty() => {
                let items = Arc::new(items);
                if let Some(cache) = &self.references {
                    cache.insert(key, items.clone()).await;
                }
                Listing {
                    items,
                    source: ContentSource::Api,
                }
            }
            Ok(_) => {
                warn!("Content API returned no references, using fallback data");
                Self::fallback_references(industry)
            }
            Err(e) => {
                warn!("Using fallback references: {}", e);
                Self::fallback_references(industry)
            }
        }
    }

    pub async fn gallery(&self) -> Listing<GalleryItem> {
        let key = String::new();

        if let Some(cache) = &self.gallery
            && let Some(items) = cache.get(&key).await
        {
            debug!("Gallery served from cache");
            return Listing {
                items,
                source: ContentSource::Cache,
            };
        }

        match self.api.list_gallery(None).await {
            Ok(items) if !items.is_empty() => {
                let items = Arc::new(items);
                if let Some(cache) = &self.gallery {
                    cache.insert(key, items.clone()).await;
                }
                Listing {
                    items,
                    source: ContentSource::Api,
                }
            }
            Ok(_) => {
                warn!("Content API returned no gallery items, using fallback data");
                Self::fallback_gallery()
            }
            Err(e) => {
                warn!("Using fallback gallery: {}", e);
                Self::fallback_gallery()
            }
        }
    }

    /// One gallery item; falls back to the static list when the API fails or
    /// doesn't know the id
    pub async fn gallery_item(&self, id: &str) -> Option<GalleryItem> {
        match self.api.get_gallery_item(id).await {
            Ok(Some(item)) => return Some(item),
            Ok(None) => debug!("Gallery item {} not found in API", id),
            Err(e) => warn!("Gallery item {} lookup failed, trying fallback: {}", id, e),
        }
        fallback_gallery().iter().find(|item| item.id == id).cloned()
    }

    fn fallback_references(industry: Option<&str>) -> Listing<Reference> {
        let items = match industry {
            Some(industry) => fallback_references()
                .iter()
                .filter(|r| r.industry.as_deref() == Some(industry))
                .cloned()
                .collect(),
            None => fallback_references().to_vec(),
        };
        Listing {
            items: Arc::new(items),
            source: ContentSource::Fallback,
        }
    }

    fn fallback_gallery() -> Listing<GalleryItem> {
        Listing {
            items: Arc::new(fallback_gallery().to_vec()),
            source: ContentSource::Fallback,
        }
    }

    pub fn api(&self) -> &Arc<dyn ContentApi> {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiError, Attachment, ContactResponse, ContactSubmission};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted API: `None` means fail every call
    struct StubApi {
        references: Option<Vec<Reference>>,
        gallery: Option<Vec<GalleryItem>>,
        calls: AtomicUsize,
        gallery_calls: AtomicUsize,
    }

    impl StubApi {
        fn new(references: Option<Vec<Reference>>) -> Self {
            Self {
                references,
                gallery: None,
                calls: AtomicUsize::new(0),
                gallery_calls: AtomicUsize::new(0),
            }
        }

        fn with_gallery(gallery: Option<Vec<GalleryItem>>) -> Self {
            Self {
                gallery,
                ..Self::new(None)
            }
        }
    }

    #[async_trait]
    impl ContentApi for StubApi {
        async fn list_references(&self, _: Option<&str>) -> Result<Vec<Reference>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.references
                .clone()
                .ok_or_else(|| ApiError::network("connection refused", "/api/references"))
        }

        async fn list_gallery(&self, _: Option<&str>) -> Result<Vec<GalleryItem>, ApiError> {
            self.gallery_calls.fetch_add(1, Ordering::SeqCst);
            self.gallery
                .clone()
                .ok_or_else(|| ApiError::network("connection refused", "/api/gallery"))
        }

        async fn get_gallery_item(&self, _: &str) -> Result<Option<GalleryItem>, ApiError> {
            Err(ApiError::network("connection refused", "/api/gallery/x"))
        }

        async fn submit_contact(
            &self,
            _: &ContactSubmission,
            _: Option<Attachment>,
        ) -> Result<ContactResponse, ApiError> {
            unreachable!()
        }

        fn base_url(&self) -> &str {
            "http://api.test"
        }
    }

    fn one_reference() -> Vec<Reference> {
        vec![Reference {
            id: "r1".into(),
            name: "Voith".into(),
            industry: Some("Industrial Technology".into()),
            description: None,
            logo_url: Some("/uploads/voith.png".into()),
            website_url: None,
            display_order: None,
            created_at: None,
        }]
    }

    fn one_gallery_item() -> Vec<GalleryItem> {
        vec![GalleryItem {
            id: "g1".into(),
            title: "5-axis housing".into(),
            category: Some("Parts".into()),
            image_url: Some("/uploads/housing.jpg".into()),
            description: None,
            created_at: None,
        }]
    }

    #[tokio::test]
    async fn test_failed_fetch_uses_full_fallback() {
        let service = ContentService::new(Arc::new(StubApi::new(None)), &ApiConfig::default());
        let listing = service.references(None).await;
        assert!(listing.is_fallback());
        assert_eq!(listing.items.len(), fallback_references().len());
    }

    #[tokio::test]
    async fn test_fallback_honours_industry() {
        let service = ContentService::new(Arc::new(StubApi::new(None)), &ApiConfig::default());
        let listing = service.references(Some("Automotive")).await;
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].name, "MAN Truck & Bus");
    }

    #[tokio::test]
    async fn test_empty_api_result_uses_fallback() {
        let service =
            ContentService::new(Arc::new(StubApi::new(Some(Vec::new()))), &ApiConfig::default());
        assert!(service.references(None).await.is_fallback());
    }

    #[tokio::test]
    async fn test_second_call_is_cached() {
        let api = Arc::new(StubApi::new(Some(one_reference())));
        let service = ContentService::new(api.clone(), &ApiConfig::default());

        assert_eq!(service.references(None).await.source, ContentSource::Api);
        assert_eq!(service.references(None).await.source, ContentSource::Cache);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let api = Arc::new(StubApi::new(Some(one_reference())));
        let config = ApiConfig {
            cache_ttl_secs: 0,
            ..ApiConfig::default()
        };
        let service = ContentService::new(api.clone(), &config);

        service.references(None).await;
        service.references(None).await;
        assert_eq!(api.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_gallery_failure_and_empty_result_use_fallback() {
        for gallery in [None, Some(Vec::new())] {
            let api = Arc::new(StubApi::with_gallery(gallery));
            let service = ContentService::new(api.clone(), &ApiConfig::default());

            let listing = service.gallery().await;
            assert!(listing.is_fallback());
            assert_eq!(listing.items.len(), fallback_gallery().len());

            // fallbacks are not cached
            assert!(service.gallery().await.is_fallback());
            assert_eq!(api.gallery_calls.load(Ordering::SeqCst), 2);
        }
    }

    #[tokio::test]
    async fn test_gallery_second_call_is_cached() {
        let api = Arc::new(StubApi::with_gallery(Some(one_gallery_item())));
        let service = ContentService::new(api.clone(), &ApiConfig::default());

        let first = service.gallery().await;
        assert_eq!(first.source, ContentSource::Api);
        assert_eq!(first.items[0].title, "5-axis housing");

        let second = service.gallery().await;
        assert_eq!(second.source, ContentSource::Cache);
        assert_eq!(second.items[0].id, "g1");
        assert_eq!(api.gallery_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_gallery_zero_ttl_fetches_every_time() {
        let api = Arc::new(StubApi::with_gallery(Some(one_gallery_item())));
        let config = ApiConfig {
            cache_ttl_secs: 0,
            ..ApiConfig::default()
        };
        let service = ContentService::new(api.clone(), &config);

        assert_eq!(service.gallery().await.source, ContentSource::Api);
        assert_eq!(service.gallery().await.source, ContentSource::Api);
        assert_eq!(api.gallery_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_gallery_item_falls_back_to_static_list() {
        let service = ContentService::new(Arc::new(StubApi::new(None)), &ApiConfig::default());
        let item = service.gallery_item("4").await.unwrap();
        assert_eq!(item.title, "Production Floor");
        assert!(service.gallery_item("404").await.is_none());
    }

    #[tokio::test]
    async fn test_image_url_uses_api_base() {
        let service = ContentService::new(Arc::new(StubApi::new(None)), &ApiConfig::default());
        assert_eq!(
            service.image_url(Some("/uploads/voith.png")),
            "http://api.test/uploads/voith.png"
        );
        assert_eq!(service.image_url(None), "");
    }
}
