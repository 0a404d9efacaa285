//! Certificate PDF downloads
//!
//! Only the file names listed in [`CERTIFICATES`] are served, so request
//! paths never reach the filesystem unchecked.
//!
//! [`CERTIFICATES`]: crate::models::CERTIFICATES

use std::path::Path;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, error};

use super::pages::not_found_page;
use crate::config::SiteConfig;
use crate::errors::{Result, SiteError};
use crate::models::Certificate;

pub struct CertificateService;

impl CertificateService {
    pub async fn download(
        req: HttpRequest,
        file: web::Path<String>,
        site: web::Data<SiteConfig>,
    ) -> Result<HttpResponse> {
        let Some(cert) = Certificate::by_file(&file) else {
            debug!("Unknown certificate requested: {}", file);
            return Ok(not_found_page(&req, &site));
        };

        let path = Path::new(&site.certificates_dir).join(cert.file);
        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Certificate file missing: {}", path.display());
                return Ok(not_found_page(&req, &site));
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                return Err(SiteError::file_operation(format!(
                    "Failed to read certificate {}",
                    cert.file
                )));
            }
        };

        Ok(HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", cert.file),
            ))
            .body(data))
    }
}
