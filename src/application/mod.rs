//! Application layer services.
//!
//! Services coordinate domain rules with the gateway ports and expose a small
//! API to the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::contact_form::ContactFormController`] - Contact form state and submission
//! - [`services::duplicate_guard::DeduplicatingBackend`] - Suppresses repeated contact submissions
//! - [`services::lead_intake::LeadIntakeService`] - Acceptance of leads posted to the backend API

pub mod services;
