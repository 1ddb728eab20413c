//! Domain layer containing the site's content model and its ports.
//!
//! This module holds everything that does not depend on HTTP, templates or
//! the network: the typed content document, catalog lookups and filters, and
//! the traits the application layer talks to.
//!
//! # Architecture
//!
//! - [`entities`] - Content records, page copy and contact submission types
//! - [`content`] - The [`content::ContentDocument`] root and its load-time validation
//! - [`catalog`] - Slug resolution, related items and listing filters
//! - [`gateways`] - Port traits for the contact backend and lead delivery
//!
//! # Design Principles
//!
//! - Content is immutable after load and shared read-only
//! - Lookups and filters are pure functions over catalog slices
//! - Port traits are implemented by [`crate::infrastructure`] and mocked in tests

pub mod catalog;
pub mod content;
pub mod entities;
pub mod gateways;
