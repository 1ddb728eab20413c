//! Top-level router combining site pages, the backend API and static assets.
//!
//! # Route Structure
//!
//! - `GET  /`, `/services`, `/case-studies`, `/insights`, `/about` - Pages
//! - `GET  /services/{slug}`, `/case-studies/{slug}`, `/insights/{slug}` - Details
//! - `GET|POST /contact`  - Contact form
//! - `GET  /thank-you`    - Submission confirmation
//! - `/api/*`             - Backend JSON API
//! - `GET  /health`       - Health check (public, not rate limited)
//! - `/static/*`          - Stylesheet and images
//! - anything else        - Not-found page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Error boundary** - Panics and unhandled server errors render a fallback page
//! - **Rate limiting** - Per-IP token bucket on `/api/*` and `POST /contact`;
//!   a limited contact submission re-renders the form
//!
//! Trailing slashes are trimmed in [`crate::server`], around this router.

use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;

use crate::api;
use crate::api::middleware::rate_limit::RateLimitMode;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::error_boundary;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - how clients are keyed for rate limiting;
///   [`RateLimitMode::Disabled`] for in-process tests without a peer address
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, rate_limit: RateLimitMode, static_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .merge(web::routes::contact_routes(&state, rate_limit))
        .merge(api::routes::api_routes(rate_limit))
        .merge(api::routes::health_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(error_boundary::panic_response))
        .layer(middleware::from_fn(error_boundary::layer))
        .layer(tracing::layer())
        .with_state(state)
}
