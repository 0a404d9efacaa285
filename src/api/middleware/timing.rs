//! Request timing
//!
//! One log line per request with method, path, status and latency. Server
//! errors are logged at warn, everything else at debug.

use std::time::Instant;

use actix_web::{
    Error,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};
use tracing::{debug, warn};

/// Coarse route group, so asset noise can be filtered out of the logs
fn classify_endpoint(path: &str) -> &'static str {
    match path {
        "/favicon.svg" => "asset",
        p if p.starts_with("/assets/") => "asset",
        p if p.starts_with("/health") => "health",
        p if p.starts_with("/certificates/") => "download",
        "/contact" => "contact",
        _ => "page",
    }
}

pub struct TimingMiddleware;

impl TimingMiddleware {
    /// Use with `actix_web::middleware::from_fn`
    pub async fn log_request(
        req: ServiceRequest,
        next: Next<impl MessageBody>,
    ) -> Result<ServiceResponse<impl MessageBody>, Error> {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();

        let result = next.call(req).await;
        let elapsed = start.elapsed();
        let endpoint = classify_endpoint(&path);

        match &result {
            Ok(resp) if resp.status().is_server_error() => warn!(
                endpoint = endpoint,
                "{} {} -> {} in {:?}",
                method,
                path,
                resp.status().as_u16(),
                elapsed
            ),
            Ok(resp) => debug!(
                endpoint = endpoint,
                "{} {} -> {} in {:?}",
                method,
                path,
                resp.status().as_u16(),
                elapsed
            ),
            Err(e) => warn!(endpoint = endpoint, "{} {} failed after {:?}: {}", method, path, elapsed, e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::middleware::from_fn;
    use actix_web::test::{TestRequest, call_service, init_service, read_body};
    use actix_web::{App, HttpResponse, http::StatusCode, web};

    #[test]
    fn test_classify_endpoint() {
        assert_eq!(classify_endpoint("/assets/site.css"), "asset");
        assert_eq!(classify_endpoint("/favicon.svg"), "asset");
        assert_eq!(classify_endpoint("/health/ready"), "health");
        assert_eq!(classify_endpoint("/certificates/iso-9001.pdf"), "download");
        assert_eq!(classify_endpoint("/certificates"), "page");
        assert_eq!(classify_endpoint("/contact"), "contact");
        assert_eq!(classify_endpoint("/"), "page");
    }

    #[actix_rt::test]
    async fn test_response_passes_through_unchanged() {
        let app = init_service(
            App::new()
                .wrap(from_fn(TimingMiddleware::log_request))
                .route(
                    "/boom",
                    web::get().to(|| async { HttpResponse::BadGateway().body("upstream") }),
                ),
        )
        .await;

        let resp = call_service(&app, TestRequest::get().uri("/boom").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(read_body(resp).await.as_ref(), b"upstream");
    }
}
