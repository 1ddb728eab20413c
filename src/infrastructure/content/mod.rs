//! Content document loading.
//!
//! - [`loader`] - Reads, parses and validates the bundled or overridden document
//! - [`markdown`] - Renders article bodies to HTML

pub mod loader;
pub mod markdown;

pub use loader::{load_api_catalog, load_document, parse_document};
