//! Catalog lookups and listing filters.
//!
//! A catalog is an ordered slice of records of one content type. Everything
//! here is a pure function of the catalog and its inputs: no caching, no
//! randomness, and results always follow catalog order unless stated.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::domain::entities::{CaseStudyRecord, PostRecord, ServiceRecord};

/// Maximum number of related records shown on a detail page.
pub const RELATED_LIMIT: usize = 3;

/// Lowercase, hyphen-separated tokens: `data-strategy-governance`.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// A record addressable by slug.
pub trait Slugged {
    fn slug(&self) -> &str;
}

/// A record that belongs to a named category.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Slugged for ServiceRecord {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for CaseStudyRecord {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for PostRecord {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Categorized for CaseStudyRecord {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for PostRecord {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Resolves a slug to the record carrying it.
///
/// Exact, case-sensitive equality. `None` is the not-found state the detail
/// pages render.
pub fn find_by_slug<'a, T: Slugged>(catalog: &'a [T], slug: &str) -> Option<&'a T> {
    catalog.iter().find(|record| record.slug() == slug)
}

/// Returns true if `slug` is a normalized, URL-safe slug.
pub fn is_url_safe_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Returns the first slug that appears more than once, if any.
pub fn first_duplicate_slug<T: Slugged>(catalog: &[T]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(catalog.len());
    catalog
        .iter()
        .map(Slugged::slug)
        .find(|slug| !seen.insert(*slug))
}

/// Other records of the same catalog, same category first.
///
/// The current record is never included. Records sharing its category come
/// before all others; within each group catalog order is kept. At most
/// [`RELATED_LIMIT`] records are returned. An unknown slug yields nothing.
pub fn related<'a, T>(catalog: &'a [T], slug: &str) -> Vec<&'a T>
where
    T: Slugged + Categorized,
{
    let Some(current) = find_by_slug(catalog, slug) else {
        return Vec::new();
    };

    let mut others: Vec<&T> = catalog.iter().filter(|r| r.slug() != slug).collect();
    // `sort_by_key` is stable, so catalog order survives inside each group.
    others.sort_by_key(|r| r.category() != current.category());
    others.truncate(RELATED_LIMIT);
    others
}

/// Distinct categories in order of first appearance.
pub fn categories<T: Categorized>(catalog: &[T]) -> Vec<&str> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .map(Categorized::category)
        .filter(|c| seen.insert(*c))
        .collect()
}

/// Exact-match category filter. `None` keeps every record.
pub fn filter_by_category<'a, T: Categorized>(
    catalog: &'a [T],
    category: Option<&str>,
) -> Vec<&'a T> {
    match category {
        Some(wanted) => catalog.iter().filter(|r| r.category() == wanted).collect(),
        None => catalog.iter().collect(),
    }
}

/// Case-insensitive substring search over title, excerpt and category.
///
/// The query is trimmed; a blank query keeps every post.
pub fn search_posts<'a>(posts: &'a [PostRecord], query: &str) -> Vec<&'a PostRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts.iter().collect();
    }

    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.excerpt.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}
