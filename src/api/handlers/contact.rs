//! Handler for the contact submission endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::contact::{CONTACT_THANKS, ContactPayload, ContactResponse};
use crate::application::services::IntakeOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a lead from the contact form.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jane",
///   "email": "jane@example.org",
///   "phone": "+254 700 000 000",
///   "company": "Acme",
///   "service": "dashboards-reporting",
///   "message": "We need a monthly reporting pack",
///   "website": ""
/// }
/// ```
///
/// `phone`, `company`, `service` and `website` may be omitted.
///
/// # Response
///
/// ```json
/// { "message": "Thank you for your inquiry! We'll get back to you soon.", "success": true }
/// ```
///
/// # Errors
///
/// Returns 422 with `{"detail": "..."}` for a malformed body or failed
/// validation (e.g. `"Invalid email"`), and 500 if the lead sink fails.
pub async fn contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::validation(rejection.body_text(), Value::Null))?;

    payload.validate()?;

    let outcome = state.lead_intake.accept(payload.into()).await?;
    if outcome == IntakeOutcome::Delivered {
        tracing::info!("contact lead accepted");
    }

    Ok(Json(ContactResponse {
        message: CONTACT_THANKS,
        success: true,
    }))
}
