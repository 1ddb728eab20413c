//! The content document and its load-time invariants.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::catalog::{Slugged, find_by_slug, first_duplicate_slug, is_url_safe_slug};
use crate::domain::entities::{
    CaseStudyRecord, Company, Footer, NavEntry, Pages, PostRecord, ServiceRecord,
};

/// Errors raised while loading or validating content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content document is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate slug '{slug}' in {catalog}")]
    DuplicateSlug { catalog: &'static str, slug: String },

    #[error("slug '{slug}' in {catalog} is not URL-safe")]
    InvalidSlug { catalog: &'static str, slug: String },

    #[error("navigation path '{0}' appears more than once")]
    DuplicateNavPath(String),

    #[error("navigation path '{0}' does not resolve to a page")]
    UnknownNavPath(String),

    #[error("company has no contact channel (email, phone or booking link)")]
    NoContactChannel,
}

/// All site copy, media references and catalogs.
///
/// Built once at startup, validated, then shared read-only for the lifetime
/// of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub company: Company,
    pub nav: Vec<NavEntry>,
    pub services: Vec<ServiceRecord>,
    pub case_studies: Vec<CaseStudyRecord>,
    pub posts: Vec<PostRecord>,
    pub pages: Pages,
    pub footer: Footer,
}

impl ContentDocument {
    /// Checks the document's invariants.
    ///
    /// `page_paths` is the set of non-parameterized routes the router serves.
    /// Navigation entries must point at one of them or at an existing detail
    /// record (`/services/{slug}`, `/case-studies/{slug}`, `/insights/{slug}`).
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self, page_paths: &[&str]) -> Result<(), ContentError> {
        if !self.company.contacts.has_any() {
            return Err(ContentError::NoContactChannel);
        }

        check_slugs("services", &self.services)?;
        check_slugs("case studies", &self.case_studies)?;
        check_slugs("posts", &self.posts)?;

        let mut seen = HashSet::new();
        for entry in self.nav.iter().chain(&self.footer.quick_links) {
            if !self.resolves(&entry.path, page_paths) {
                return Err(ContentError::UnknownNavPath(entry.path.clone()));
            }
        }
        for entry in &self.nav {
            if !seen.insert(entry.path.as_str()) {
                return Err(ContentError::DuplicateNavPath(entry.path.clone()));
            }
        }

        Ok(())
    }

    /// Returns true if `path` names a page this document can render.
    fn resolves(&self, path: &str, page_paths: &[&str]) -> bool {
        if page_paths.contains(&path) {
            return true;
        }

        if let Some(slug) = path.strip_prefix("/services/") {
            return find_by_slug(&self.services, slug).is_some();
        }
        if let Some(slug) = path.strip_prefix("/case-studies/") {
            return find_by_slug(&self.case_studies, slug).is_some();
        }
        if let Some(slug) = path.strip_prefix("/insights/") {
            return find_by_slug(&self.posts, slug).is_some();
        }

        false
    }
}

fn check_slugs<T: Slugged>(catalog: &'static str, records: &[T]) -> Result<(), ContentError> {
    if let Some(bad) = records.iter().map(Slugged::slug).find(|s| !is_url_safe_slug(s)) {
        return Err(ContentError::InvalidSlug {
            catalog,
            slug: bad.to_string(),
        });
    }

    if let Some(dup) = first_duplicate_slug(records) {
        return Err(ContentError::DuplicateSlug {
            catalog,
            slug: dup.to_string(),
        });
    }

    Ok(())
}
