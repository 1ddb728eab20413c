//! # Mstatili Site
//!
//! Marketing website for Mstatili Technologies, a tech and data consultancy,
//! built with Axum and Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Content document, record catalogs and ports
//! - **Application Layer** ([`application`]) - Contact form state machine and lead intake
//! - **Infrastructure Layer** ([`infrastructure`]) - Content loading, backend API client, lead sink
//! - **API Layer** ([`api`]) - JSON backend: contact submission and offering listings
//! - **Web Layer** ([`web`]) - Server-rendered pages, contact form and error boundary
//!
//! ## Features
//!
//! - Services, case studies and articles resolved by URL slug
//! - Category filter and text search over the catalogs
//! - Related articles by shared category
//! - Contact form submitted to the backend API (20s timeout, no retry)
//! - Rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export BACKEND_URL="http://localhost:3000"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContactFormController, LeadIntakeService};
    pub use crate::domain::content::ContentDocument;
    pub use crate::domain::entities::{CaseStudyRecord, PostRecord, ServiceRecord};
    pub use crate::error::{ApiError, AppError};
    pub use crate::state::AppState;
}
