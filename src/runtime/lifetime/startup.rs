use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::client::{ContentApi, HttpContentApi};
use crate::config::StaticConfig;
use crate::services::{ContactService, ContentService};

pub struct StartupContext {
    pub content: Arc<ContentService>,
    pub contact: Arc<ContactService>,
}

impl StartupContext {
    /// Wire the services around an existing API client
    pub fn with_api(api: Arc<dyn ContentApi>, config: &StaticConfig) -> Self {
        Self {
            content: Arc::new(ContentService::new(api.clone(), &config.api)),
            contact: Arc::new(ContactService::new(
                api,
                config.contact.max_attachment_bytes(),
            )),
        }
    }
}

/// Build the server context: content API client, services and the
/// certificate directory check
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = Instant::now();
    debug!("Starting pre-startup processing...");

    let api = HttpContentApi::from_config(&config.api)
        .map_err(|e| anyhow::anyhow!(e.format_simple()))
        .context("Failed to create content API client")?;
    info!(
        "Content API: {} (timeout {}s, cache ttl {}s)",
        config.api.base_url, config.api.timeout_secs, config.api.cache_ttl_secs
    );

    let certificates_dir = std::path::Path::new(&config.site.certificates_dir);
    if !certificates_dir.is_dir() {
        warn!(
            "Certificates directory {} not found, certificate downloads will return 404",
            certificates_dir.display()
        );
    }

    let context = StartupContext::with_api(Arc::new(api), config);
    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(context)
}
