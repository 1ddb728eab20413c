//! Handler for the service inquiry endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::contact::ContactResponse;
use crate::api::dto::service_inquiry::{SERVICE_INQUIRY_THANKS, ServiceInquiryPayload};
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a request for a quote on a specific service.
///
/// # Endpoint
///
/// `POST /api/service-inquiry`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jane",
///   "email": "jane@example.org",
///   "phone": "+254 700 000 000",
///   "service_type": "data-analytics",
///   "project_details": "Quarterly sales dashboards",
///   "budget_range": "$5k-$10k",
///   "timeline": "Q3"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Service inquiry submitted successfully! Our team will contact you soon.", "success": true }
/// ```
///
/// # Errors
///
/// Returns 422 with `{"detail": "..."}` for a malformed body or failed
/// validation, and 500 if the lead sink fails.
pub async fn service_inquiry_handler(
    State(state): State<AppState>,
    payload: Result<Json<ServiceInquiryPayload>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::validation(rejection.body_text(), Value::Null))?;

    payload.validate()?;

    state.lead_intake.accept_inquiry(payload.into()).await?;
    tracing::info!("service inquiry accepted");

    Ok(Json(ContactResponse {
        message: SERVICE_INQUIRY_THANKS,
        success: true,
    }))
}
