//! Business logic services for the application layer.

pub mod contact_form;
pub mod duplicate_guard;
pub mod lead_intake;

pub use contact_form::{
    ContactField, ContactFields, ContactFormController, ServiceOption, SubmissionStatus,
    SubmitOutcome,
};
pub use duplicate_guard::DeduplicatingBackend;
pub use lead_intake::{IntakeOutcome, LeadIntakeService};
