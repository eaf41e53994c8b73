//! HTTP server initialization and runtime setup.
//!
//! Wires the file stores and the shortener service, then runs the Axum
//! server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::{FileAuditLog, FileRegistryStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - File stores rooted in the configured data directory
/// - The shortener service and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let registry = Arc::new(FileRegistryStore::new(&config.data_dir));
    let audit = Arc::new(FileAuditLog::new(&config.data_dir));
    let shortener = Arc::new(ShortenerService::new(registry, audit));
    tracing::info!("Store directory: {}", config.data_dir);

    let state = AppState {
        shortener,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
