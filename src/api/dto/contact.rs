//! DTOs for the contact endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::ContactRequest;

/// Body of `POST /api/contact`.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactPayload {
    #[validate(custom(function = "name_present"))]
    pub name: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub service: Option<String>,

    #[validate(custom(function = "message_present"))]
    pub message: String,

    /// Honeypot. Browsers leave it empty.
    #[serde(default)]
    pub website: String,
}

impl From<ContactPayload> for ContactRequest {
    fn from(payload: ContactPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email.trim().to_string(),
            phone: payload.phone,
            company: payload.company,
            service: payload.service,
            message: payload.message,
            website: payload.website,
        }
    }
}

/// Successful answer of `POST /api/contact`.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: &'static str,
    pub success: bool,
}

pub const CONTACT_THANKS: &str = "Thank you for your inquiry! We'll get back to you soon.";

fn name_present(value: &str) -> Result<(), ValidationError> {
    present(value, "Name is required")
}

fn message_present(value: &str) -> Result<(), ValidationError> {
    present(value, "Message is required")
}

fn present(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(message.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
            company: None,
            service: None,
            message: "Need help".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_blank_name_and_message_fail() {
        let mut p = payload();
        p.name = "  ".to_string();
        p.message = String::new();

        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn test_invalid_email_message() {
        let mut p = payload();
        p.email = "not-an-email".to_string();

        let errors = p.validate().unwrap_err();
        let email_errors = &errors.field_errors()["email"];
        assert_eq!(
            email_errors[0].message.as_deref(),
            Some("Invalid email")
        );
    }

    #[test]
    fn test_website_defaults_to_empty() {
        let p: ContactPayload = serde_json::from_str(
            r#"{"name":"Jane","email":"jane@x.com","message":"Hi"}"#,
        )
        .unwrap();
        assert_eq!(p.website, "");
        assert!(p.phone.is_none());
    }
}
