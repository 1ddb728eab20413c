//! Error boundary wrapped once around the whole router.
//!
//! Two layers cooperate:
//!
//! 1. [`tower_http::catch_panic::CatchPanicLayer`] with [`panic_response`]
//!    turns a panicking handler into a 500 fallback page.
//! 2. [`layer`] replaces any other server error that is not JSON (a failed
//!    template render, an extractor failure) with the same page.
//!
//! JSON 5xx responses from the API pass through untouched; API clients
//! expect their `{"detail"}` body.

use askama::Template;
use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::any::Any;

/// Marks a response already rendered by the boundary.
#[derive(Debug, Clone, Copy)]
struct BoundaryRendered;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
}

/// Middleware replacing unhandled non-JSON 5xx responses with the fallback
/// page.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .merge(site_routes())
///     .layer(CatchPanicLayer::custom(error_boundary::panic_response))
///     .layer(middleware::from_fn(error_boundary::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let status = response.status();

    if !status.is_server_error()
        || is_json(&response)
        || response.extensions().get::<BoundaryRendered>().is_some()
    {
        return response;
    }

    tracing::error!(%method, %path, status = status.as_u16(), "request failed, rendering error page");
    fallback_page(status)
}

/// Response for a panicking handler; used with `CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "handler panicked, rendering error page");
    fallback_page(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Renders the "Something went wrong" page with `status`.
pub fn fallback_page(status: StatusCode) -> Response {
    let body = ErrorTemplate {
        status: status.as_u16(),
    }
    .render()
    .unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to render error page");
        String::from("Something went wrong.")
    });

    let mut response = (status, Html(body)).into_response();
    response.extensions_mut().insert(BoundaryRendered);
    response
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
