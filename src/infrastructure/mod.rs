//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer and loads the
//! content document.
//!
//! # Modules
//!
//! - [`api_client`] - HTTP client for the contact backend API
//! - [`content`] - Content document loading and Markdown rendering
//! - [`leads`] - Lead sink implementations

pub mod api_client;
pub mod content;
pub mod leads;
