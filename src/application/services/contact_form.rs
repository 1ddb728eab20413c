//! Contact form controller: field state, validation and submission lifecycle.
//!
//! # State Machine
//!
//! ```text
//!            submit (valid)            backend ok
//!   Idle ───────────────────▶ Submitting ──────────▶ Success (terminal)
//!    ▲  │ submit (invalid)        │
//!    └──┘ stays, field errors     │ backend failed
//!                                 ▼
//!   Error ◀───────────────────────┘
//!     │ submit (valid)
//!     └──────────▶ Submitting
//! ```
//!
//! One controller backs one rendered contact form. Submitting while a
//! submission is in flight, or after success, is ignored. Nothing retries
//! automatically.

use std::collections::BTreeMap;
use validator::ValidateEmail;

use crate::domain::entities::{ContactReceipt, ContactRequest, ServiceRecord};
use crate::domain::gateways::BackendGateway;
use crate::error::ApiError;

/// Shown when the backend gives no usable explanation.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send. Please try again, or email us directly.";

/// Shown when a submission was turned away before it reached the backend.
pub const THROTTLED_MESSAGE: &str =
    "Too many requests. Please wait a moment and try again, or email us directly.";

/// Route the visitor lands on after a successful submission.
pub const CONFIRMATION_PATH: &str = "/thank-you";

/// Service-interest values offered in addition to the catalog slugs.
pub const EXTRA_SERVICE_OPTIONS: [(&str, &str); 2] = [
    ("consultation", "General consultation"),
    ("other", "Other"),
];

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
    /// Hidden honeypot.
    Website,
}

impl ContactField {
    /// HTML `name`/`id` of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Service => "service",
            Self::Message => "message",
            Self::Website => "website",
        }
    }
}

/// Raw field values as typed by the visitor. Empty means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub website: String,
}

impl ContactFields {
    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Company => &mut self.company,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
            ContactField::Website => &mut self.website,
        }
    }
}

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Field-level validation messages, ordered by field.
pub type FieldErrors = BTreeMap<ContactField, &'static str>;

/// One entry of the service-interest select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOption {
    pub value: String,
    pub label: String,
}

/// Builds the service-interest options: every catalog slug, then the extras.
pub fn service_options(services: &[ServiceRecord]) -> Vec<ServiceOption> {
    services
        .iter()
        .map(|s| ServiceOption {
            value: s.slug.clone(),
            label: s.title.clone(),
        })
        .chain(EXTRA_SERVICE_OPTIONS.iter().map(|(value, label)| ServiceOption {
            value: (*value).to_string(),
            label: (*label).to_string(),
        }))
        .collect()
}

/// What a call to [`ContactFormController::submit`] led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight or had succeeded; nothing was sent.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid,
    /// The backend accepted the lead; navigate to `redirect_to`.
    Succeeded { redirect_to: &'static str },
    /// The backend call failed; the error message is set.
    Failed,
}

/// Owns the state of one contact form.
#[derive(Debug, Clone)]
pub struct ContactFormController {
    fields: ContactFields,
    status: SubmissionStatus,
    error_message: Option<String>,
    field_errors: FieldErrors,
    options: Vec<ServiceOption>,
}

impl ContactFormController {
    /// Creates an idle, empty form offering `options` as service interests.
    pub fn new(options: Vec<ServiceOption>) -> Self {
        Self {
            fields: ContactFields::default(),
            status: SubmissionStatus::Idle,
            error_message: None,
            field_errors: FieldErrors::new(),
            options,
        }
    }

    /// Preselects a service interest, if `value` is one of the offered options.
    pub fn preselect_service(&mut self, value: &str) {
        if self.is_offered(value) {
            self.fields.service = value.to_string();
        }
    }

    /// Sets one field. The latest write wins.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Present only while the status is [`SubmissionStatus::Error`].
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn service_options(&self) -> &[ServiceOption] {
        &self.options
    }

    /// Runs the client-side checks without changing state.
    ///
    /// Name, email and message are required (non-blank after trimming); the
    /// email must look like an address; a chosen service must be offered.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.fields.name.trim().is_empty() {
            errors.insert(ContactField::Name, "Please enter your name.");
        }

        let email = self.fields.email.trim().to_string();
        if email.is_empty() {
            errors.insert(ContactField::Email, "Please enter your email address.");
        } else if !email.validate_email() {
            errors.insert(ContactField::Email, "Please enter a valid email address.");
        }

        if self.fields.message.trim().is_empty() {
            errors.insert(ContactField::Message, "Please tell us what you need help with.");
        }

        let service = self.fields.service.trim();
        if !service.is_empty() && !self.is_offered(service) {
            errors.insert(ContactField::Service, "Please choose one of the listed services.");
        }

        errors
    }

    /// Moves to `Submitting` and returns the request to send.
    ///
    /// # Errors
    ///
    /// Returns the outcome that ends the attempt early: [`SubmitOutcome::Ignored`]
    /// while submitting or after success, [`SubmitOutcome::Invalid`] when the
    /// validation gate fails (the status is left unchanged).
    pub fn start_submission(&mut self) -> Result<ContactRequest, SubmitOutcome> {
        if matches!(
            self.status,
            SubmissionStatus::Submitting | SubmissionStatus::Success
        ) {
            return Err(SubmitOutcome::Ignored);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.field_errors = errors;
            return Err(SubmitOutcome::Invalid);
        }

        self.field_errors.clear();
        self.error_message = None;
        self.status = SubmissionStatus::Submitting;

        Ok(self.to_request())
    }

    /// Applies the backend's answer to an in-flight submission.
    ///
    /// Success clears every field; failure keeps them and stores a message.
    /// Outside `Submitting` this does nothing and returns
    /// [`SubmitOutcome::Ignored`].
    pub fn finish_submission(
        &mut self,
        result: Result<ContactReceipt, ApiError>,
    ) -> SubmitOutcome {
        if self.status != SubmissionStatus::Submitting {
            return SubmitOutcome::Ignored;
        }

        match result {
            Ok(_) => {
                self.fields = ContactFields::default();
                self.status = SubmissionStatus::Success;
                SubmitOutcome::Succeeded {
                    redirect_to: CONFIRMATION_PATH,
                }
            }
            Err(err) => {
                self.error_message = Some(failure_message(&err));
                self.status = SubmissionStatus::Error;
                SubmitOutcome::Failed
            }
        }
    }

    /// Marks an attempt that was refused before the backend saw it, such as by
    /// rate limiting. Fields are kept; after success this does nothing.
    pub fn reject(&mut self, message: impl Into<String>) -> SubmitOutcome {
        if self.status == SubmissionStatus::Success {
            return SubmitOutcome::Ignored;
        }

        self.field_errors.clear();
        self.error_message = Some(message.into());
        self.status = SubmissionStatus::Error;
        SubmitOutcome::Failed
    }

    /// Validates, sends once through `gateway`, and applies the outcome.
    pub async fn submit<G>(&mut self, gateway: &G) -> SubmitOutcome
    where
        G: BackendGateway + ?Sized,
    {
        let request = match self.start_submission() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let result = gateway.submit_contact(&request).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "contact submission failed");
        }

        self.finish_submission(result)
    }

    fn is_offered(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.fields.name.trim().to_string(),
            email: self.fields.email.trim().to_string(),
            phone: optional(&self.fields.phone),
            company: optional(&self.fields.company),
            service: optional(&self.fields.service),
            message: self.fields.message.trim().to_string(),
            website: self.fields.website.clone(),
        }
    }
}

/// User-facing text for a failed submission.
///
/// A server-provided `detail` is shown verbatim; everything else collapses to
/// [`GENERIC_FAILURE_MESSAGE`].
pub fn failure_message(err: &ApiError) -> String {
    err.detail()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(GENERIC_FAILURE_MESSAGE)
        .to_string()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
