//! Site chrome shared by every page.

use chrono::{Datelike, Utc};

use crate::domain::content::ContentDocument;
use crate::domain::entities::{Company, Footer, Seo};

/// A header navigation link.
#[derive(Debug, Clone)]
pub struct NavLink<'a> {
    pub label: &'a str,
    pub path: &'a str,
    pub active: bool,
}

/// Everything `base.html` renders around a page body.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub company: &'a Company,
    pub nav: Vec<NavLink<'a>>,
    pub footer: &'a Footer,
    pub phone_href: Option<String>,
    pub year: i32,
}

impl<'a> Layout<'a> {
    /// Builds the chrome for the page at `current_path`.
    pub fn new(
        content: &'a ContentDocument,
        current_path: &str,
        title: &'a str,
        description: &'a str,
    ) -> Self {
        let nav = content
            .nav
            .iter()
            .map(|entry| NavLink {
                label: &entry.label,
                path: &entry.path,
                active: is_active(&entry.path, current_path),
            })
            .collect();

        Self {
            title,
            description,
            company: &content.company,
            nav,
            footer: &content.footer,
            phone_href: content.company.contacts.phone_href(),
            year: Utc::now().year(),
        }
    }

    /// Same as [`Layout::new`] with a page's SEO block.
    pub fn with_seo(content: &'a ContentDocument, current_path: &str, seo: &'a Seo) -> Self {
        Self::new(content, current_path, &seo.title, &seo.description)
    }
}

/// A nav entry is active on its own path and, except for `/`, below it.
fn is_active(nav_path: &str, current_path: &str) -> bool {
    if nav_path == "/" {
        return current_path == "/";
    }
    current_path == nav_path
        || current_path
            .strip_prefix(nav_path)
            .is_some_and(|rest| rest.starts_with('/'))
}
