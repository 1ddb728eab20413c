//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    contact_handler, data_solutions_detail_handler, health_handler, root_handler,
    service_inquiry_handler, services_handler,
};
use crate::api::middleware::rate_limit::{self, RateLimitMode};
use crate::state::AppState;

/// Backend endpoints, rate limited per client.
///
/// # Endpoints
///
/// - `GET  /api/`                       - Welcome message (reachability check)
/// - `POST /api/contact`                - Submit a lead
/// - `POST /api/service-inquiry`        - Request a scoped quote
/// - `GET  /api/services`               - Offering list
/// - `GET  /api/data-solutions-detail`  - Data solutions planning detail
pub fn api_routes(mode: RateLimitMode) -> Router<AppState> {
    let router = Router::new()
        .route("/api", get(root_handler))
        .route("/api/", get(root_handler))
        .route("/api/contact", post(contact_handler))
        .route("/api/service-inquiry", post(service_inquiry_handler))
        .route("/api/services", get(services_handler))
        .route("/api/data-solutions-detail", get(data_solutions_detail_handler));

    match mode {
        RateLimitMode::Disabled => router,
        RateLimitMode::PeerIp => router.layer(rate_limit::api_layer()),
        RateLimitMode::BehindProxy => router.layer(rate_limit::api_layer_proxied()),
    }
}

/// `GET /health`, never rate limited.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
