//! Site route configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::api::middleware::rate_limit::{self, RateLimitMode};
use crate::state::AppState;
use crate::web::handlers::{
    about_handler, case_studies_handler, case_study_detail_handler, contact_form_handler,
    contact_submit_handler, home_handler, home_redirect_handler, insights_handler,
    post_detail_handler, service_detail_handler, services_handler, thank_you_handler,
};
use crate::web::middleware::contact_throttle;

/// Non-parameterized page routes. Navigation entries must resolve to one of
/// these or to an existing detail record.
pub const PAGE_PATHS: &[&str] = &[
    "/",
    "/services",
    "/case-studies",
    "/insights",
    "/about",
    "/contact",
    "/thank-you",
];

/// Public pages.
///
/// # Endpoints
///
/// - `GET /`                      - Home
/// - `GET /home`                  - 308 to `/`
/// - `GET /services`              - Service listing
/// - `GET /services/{slug}`       - Service detail
/// - `GET /case-studies`          - Case study listing, `?category=` filter
/// - `GET /case-studies/{slug}`   - Case study detail
/// - `GET /insights`              - Article listing, `?q=` search
/// - `GET /insights/{slug}`       - Article with related articles
/// - `GET /about`                 - About
/// - `GET /thank-you`             - Submission confirmation
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/home", get(home_redirect_handler))
        .route("/services", get(services_handler))
        .route("/services/{slug}", get(service_detail_handler))
        .route("/case-studies", get(case_studies_handler))
        .route("/case-studies/{slug}", get(case_study_detail_handler))
        .route("/insights", get(insights_handler))
        .route("/insights/{slug}", get(post_detail_handler))
        .route("/about", get(about_handler))
        .route("/thank-you", get(thank_you_handler))
}

/// The contact page. Submissions are rate limited per client; a limited
/// submission re-renders the form with the visitor's input kept.
///
/// # Endpoints
///
/// - `GET  /contact` - Form, `?service=` preselects a service
/// - `POST /contact` - Submit the form
pub fn contact_routes(state: &AppState, mode: RateLimitMode) -> Router<AppState> {
    let submit = post(contact_submit_handler);
    let throttled = middleware::from_fn_with_state(state.clone(), contact_throttle::layer);
    let submit = match mode {
        RateLimitMode::Disabled => submit,
        RateLimitMode::PeerIp => submit.layer(rate_limit::contact_layer()).layer(throttled),
        RateLimitMode::BehindProxy => submit
            .layer(rate_limit::contact_layer_proxied())
            .layer(throttled),
    };

    Router::new().route("/contact", get(contact_form_handler).merge(submit))
}
