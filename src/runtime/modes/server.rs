//! Server mode
//!
//! Starts the browser front: creation page on `/`, redirect handler on
//! `/{code}`.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{error, warn};

use crate::api::middleware::AccessLog;
use crate::api::services::{frontend_routes, redirect_routes};
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Upper bound for the creation form body
const FORM_LIMIT_BYTES: usize = 16 * 1024;

/// Run the HTTP server
///
/// **Note**: Logging must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_startup(config).map_err(|e| {
        error!("Server startup failed: {}", e);
        e
    })?;
    let service = startup.service;

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let workers = config.server.workers.max(1);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(AccessLog)
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .app_data(web::Data::new(service.clone()))
            .app_data(web::FormConfig::default().limit(FORM_LIMIT_BYTES))
            // `/` must be registered before `/{code}`
            .configure(frontend_routes)
            .configure(redirect_routes)
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .workers(workers)
    .disable_signals()
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    warn!("Starting server at http://{} ({} workers)", bind_address, workers);

    actix_web::rt::spawn(lifetime::shutdown::listen_for_shutdown(server.handle()));
    server.await.context("Server terminated with an error")?;

    Ok(())
}
