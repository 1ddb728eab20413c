//! HTTP server initialization and runtime setup.
//!
//! Loads content, wires the backend client and lead sink, and runs the Axum
//! server until Ctrl+C.

use crate::config::Config;
use crate::infrastructure::api_client::{ApiClient, HttpBackendGateway};
use crate::infrastructure::content::{load_api_catalog, load_document};
use crate::infrastructure::leads::TracingLeadSink;
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::routes::PAGE_PATHS;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the shared state from configuration.
///
/// # Errors
///
/// Returns an error if the content document fails validation or the backend
/// URL is unusable. Nothing is served from an invalid document.
pub fn build_state(config: &Config) -> Result<AppState> {
    let content = load_document(config.content_path.as_deref(), PAGE_PATHS)
        .context("Failed to load content document")?;
    let api_catalog = load_api_catalog().context("Failed to load API catalog")?;

    let client = ApiClient::new(&config.backend_url).context("Failed to create backend client")?;
    tracing::info!(backend = client.base_url(), "Backend client ready");

    Ok(AppState::new(
        content,
        api_catalog,
        Arc::new(HttpBackendGateway::new(client)),
        Arc::new(TracingLeadSink),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Content loading fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let router = app_router(state, config.rate_limit_mode(), &config.static_dir);
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
