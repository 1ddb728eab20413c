//! Loads the content document at startup.
//!
//! The document shipped with the binary is embedded at compile time. A file
//! path may override it (see `CONTENT_PATH`); either way the result is
//! validated before the server accepts traffic.

use std::path::Path;

use crate::domain::content::{ContentDocument, ContentError};
use crate::domain::entities::ApiCatalog;

const BUNDLED_DOCUMENT: &str = include_str!("../../../content/site.json");
const BUNDLED_API_CATALOG: &str = include_str!("../../../content/api_catalog.json");

/// Loads and validates the content document.
///
/// Reads `path` when given, otherwise the bundled document. `page_paths` are
/// the static routes navigation entries may point at.
///
/// # Errors
///
/// - [`ContentError::Io`] if the override file cannot be read
/// - [`ContentError::Parse`] if the JSON does not match the document shape,
///   including unknown icon keys
/// - Any invariant violation reported by [`ContentDocument::validate`]
pub fn load_document(
    path: Option<&Path>,
    page_paths: &[&str],
) -> Result<ContentDocument, ContentError> {
    let document = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "Loading content document from file");
            parse_document(&raw, page_paths)?
        }
        None => parse_document(BUNDLED_DOCUMENT, page_paths)?,
    };

    tracing::info!(
        services = document.services.len(),
        case_studies = document.case_studies.len(),
        posts = document.posts.len(),
        "Content document loaded"
    );

    Ok(document)
}

/// Parses and validates a content document from JSON text.
pub fn parse_document(raw: &str, page_paths: &[&str]) -> Result<ContentDocument, ContentError> {
    let document: ContentDocument = serde_json::from_str(raw)?;
    document.validate(page_paths)?;
    Ok(document)
}

/// Parses the offerings served by the backend API's listing endpoints.
pub fn load_api_catalog() -> Result<ApiCatalog, ContentError> {
    Ok(serde_json::from_str(BUNDLED_API_CATALOG)?)
}
