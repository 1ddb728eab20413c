//! DTOs for the service inquiry endpoint.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::ServiceInquiry;

/// Body of `POST /api/service-inquiry`.
///
/// Every key must be present; only the name, email, service type and
/// project details have to carry a value.
#[derive(Debug, Deserialize, Validate)]
pub struct ServiceInquiryPayload {
    #[validate(custom(function = "name_present"))]
    pub name: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    pub phone: String,

    #[validate(custom(function = "service_type_present"))]
    pub service_type: String,

    #[validate(custom(function = "project_details_present"))]
    pub project_details: String,

    pub budget_range: String,

    pub timeline: String,
}

impl From<ServiceInquiryPayload> for ServiceInquiry {
    fn from(payload: ServiceInquiryPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email.trim().to_string(),
            phone: payload.phone,
            service_type: payload.service_type,
            project_details: payload.project_details,
            budget_range: payload.budget_range,
            timeline: payload.timeline,
        }
    }
}

pub const SERVICE_INQUIRY_THANKS: &str =
    "Service inquiry submitted successfully! Our team will contact you soon.";

fn name_present(value: &str) -> Result<(), ValidationError> {
    present(value, "Name is required")
}

fn service_type_present(value: &str) -> Result<(), ValidationError> {
    present(value, "Service type is required")
}

fn project_details_present(value: &str) -> Result<(), ValidationError> {
    present(value, "Project details are required")
}

fn present(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(message.into()));
    }
    Ok(())
}
