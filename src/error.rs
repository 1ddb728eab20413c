//! Error types shared across layers.
//!
//! - [`AppError`] - Failures of the JSON API handlers, rendered as
//!   `{"detail", "code", "errors"}` bodies
//! - [`ApiError`] - Failures of outbound calls to the backend API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    errors: Value,
}

/// Error returned by the JSON API handlers.
///
/// The `message` is what clients show verbatim, so it must be written for end
/// users.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl From<ValidationErrors> for AppError {
    /// Uses the first message (by field name) as `detail`, and lists every
    /// field's messages under `errors`.
    fn from(errors: ValidationErrors) -> Self {
        let mut by_field: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {field}"))
                })
                .collect();
            by_field.insert(field.to_string(), messages);
        }

        let message = by_field
            .values()
            .flat_map(|messages| messages.first())
            .next()
            .cloned()
            .unwrap_or_else(|| "Invalid request".to_string());

        Self::validation(message, json!(by_field))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail, errors) = match self {
            AppError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "internal error in API handler");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    message,
                    details,
                )
            }
        };

        let body = ErrorBody {
            detail,
            code,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Failure of a call made through [`crate::infrastructure::api_client::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response: DNS, connection or timeout.
    #[error("backend unreachable: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `detail` carries the body's `detail` string verbatim when present.
    #[error("backend responded with status {status}")]
    Http { status: u16, detail: Option<String> },

    /// A 2xx response whose body was not the expected JSON.
    #[error("unexpected backend response: {0}")]
    Decode(String),

    /// The client could not be built from its configuration.
    #[error("invalid API client configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Server-provided explanation, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
