//! Server mode
//!
//! Builds the actix-web application and runs it until Ctrl+C.

use std::time::Duration;

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders, from_fn},
    web,
};
use anyhow::Result;
use tracing::warn;

use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::api::services::{AppStartTime, site_routes};
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Upper bound for the worker count
const MAX_WORKERS: usize = 32;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup(config).await?;
    let content = startup.content.clone();
    let contact = startup.contact.clone();
    let site = config.site.clone();

    let cpu_count = config.server.cpu_count.clamp(1, MAX_WORKERS);
    warn!("Using {} CPU cores for the server", cpu_count);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(content.clone()))
            .app_data(web::Data::new(contact.clone()))
            .app_data(web::Data::new(site.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "SAMEORIGIN"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .wrap(from_fn(TimingMiddleware::log_request))
            .wrap(from_fn(RequestIdMiddleware::assign))
            .configure(site_routes)
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .disable_signals()
    .workers(cpu_count);

    // Bind to Unix socket or TCP address
    let server = {
        #[cfg(unix)]
        {
            if let Some(ref socket_path) = config.server.unix_socket {
                warn!("Starting server on Unix socket: {}", socket_path);
                if std::path::Path::new(socket_path).exists() {
                    std::fs::remove_file(socket_path)?;
                }
                server.bind_uds(socket_path)?
            } else {
                let bind_address = format!("{}:{}", config.server.host, config.server.port);
                warn!("Starting server at http://{}", bind_address);
                server.bind(bind_address)?
            }
        }

        #[cfg(not(unix))]
        {
            let bind_address = format!("{}:{}", config.server.host, config.server.port);
            warn!("Starting server at http://{}", bind_address);
            server.bind(bind_address)?
        }
    }
    .run();

    let handle = server.handle();

    // Wait for server or shutdown signal
    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(handle) => {
            warn!("Graceful shutdown completed");
        }
    }

    Ok(())
}
