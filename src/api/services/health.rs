use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use tracing::{error, info, trace};

use crate::services::ContentService;

/// Timeout for the readiness call to the content API
const READY_TIMEOUT: Duration = Duration::from_secs(5);

// Process start time
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub uptime: u64,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub api: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub response_time_ms: u64,
}

pub struct HealthService;

impl HealthService {
    /// Liveness: the process is up
    pub async fn health_check(app_start_time: web::Data<AppStartTime>) -> impl Responder {
        trace!("Received health check request");
        let now = chrono::Utc::now();
        let uptime = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

        HttpResponse::Ok().json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            timestamp: now.to_rfc3339(),
            uptime,
        })
    }

    /// Readiness: the content API answers within [`READY_TIMEOUT`]
    pub async fn readiness_check(content: web::Data<Arc<ContentService>>) -> impl Responder {
        let start_time = Instant::now();

        let result = tokio::time::timeout(READY_TIMEOUT, content.api().list_references(None)).await;
        let (ready, error) = match result {
            Ok(Ok(_)) => (true, None),
            Ok(Err(e)) => {
                error!("Readiness check failed: {}", e);
                (false, Some(e.to_string()))
            }
            Err(_) => {
                error!("Readiness check timeout");
                (false, Some("timeout".to_string()))
            }
        };

        let body = ReadyResponse {
            status: if ready { "ready" } else { "not_ready" },
            api: if ready { "up" } else { "down" },
            error,
            response_time_ms: start_time.elapsed().as_millis() as u64,
        };
        info!(
            "Readiness check completed in {:?}, status: {}",
            start_time.elapsed(),
            body.status
        );

        if ready {
            HttpResponse::Ok().json(body)
        } else {
            HttpResponse::ServiceUnavailable().json(body)
        }
    }
}

/// Health routes
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
}
