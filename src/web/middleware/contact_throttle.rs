//! Keeps the visitor's input when a contact submission is rate limited.
//!
//! The limiter answers before the form handler runs, with a bare 429. This
//! middleware sits outside it on `POST /contact`, holds on to the form body,
//! and turns that 429 into the contact page with the fields filled back in.

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};

use crate::application::services::contact_form::{GENERIC_FAILURE_MESSAGE, THROTTLED_MESSAGE};
use crate::state::AppState;
use crate::web::handlers::{ContactFormInput, render_rejected};

/// Largest form body kept for re-rendering.
pub const FORM_BODY_LIMIT: usize = 64 * 1024;

/// Middleware re-rendering rate-limited contact submissions.
///
/// # Example
///
/// ```rust,ignore
/// let submit = post(contact_submit_handler)
///     .layer(rate_limit::contact_layer())
///     .layer(middleware::from_fn_with_state(state, contact_throttle::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();

    let bytes = match to_bytes(body, FORM_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "contact form body unreadable");
            return render_rejected(
                &state.content,
                ContactFormInput::default(),
                GENERIC_FAILURE_MESSAGE,
                StatusCode::PAYLOAD_TOO_LARGE,
            );
        }
    };

    let response = next
        .run(Request::from_parts(parts, Body::from(bytes.clone())))
        .await;

    if response.status() != StatusCode::TOO_MANY_REQUESTS {
        return response;
    }

    tracing::warn!("contact submission rate limited");

    let retry_after = response.headers().get(header::RETRY_AFTER).cloned();
    let mut page = render_rejected(
        &state.content,
        ContactFormInput::from_form_body(&bytes),
        THROTTLED_MESSAGE,
        StatusCode::TOO_MANY_REQUESTS,
    );
    if let Some(value) = retry_after {
        page.headers_mut().insert(header::RETRY_AFTER, value);
    }
    page
}
