//! Case study listing (with category filter) and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::domain::catalog::{categories, filter_by_category, find_by_slug, related};
use crate::domain::entities::{CaseStudyRecord, ListingPage};
use crate::state::AppState;
use crate::web::handlers::record_not_found;
use crate::web::views::{Chip, Layout, result_count};

/// Label of the chip that clears the filter.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Default, Deserialize)]
pub struct CaseStudiesQuery {
    pub category: Option<String>,
}

impl CaseStudiesQuery {
    /// The active category; absent, blank or `All` means no filter.
    fn selected(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "case_studies.html")]
pub struct CaseStudiesTemplate<'a> {
    pub layout: Layout<'a>,
    pub page: &'a ListingPage,
    pub chips: Vec<Chip>,
    pub items: Vec<&'a CaseStudyRecord>,
    pub count_label: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "case_study_detail.html")]
pub struct CaseStudyDetailTemplate<'a> {
    pub layout: Layout<'a>,
    pub study: &'a CaseStudyRecord,
    pub related: Vec<&'a CaseStudyRecord>,
}

/// `GET /case-studies[?category=<name>]`
///
/// The filter is an exact match on the category name. An unknown category
/// renders an empty list, not an error.
pub async fn case_studies_handler(
    State(state): State<AppState>,
    Query(query): Query<CaseStudiesQuery>,
) -> Response {
    let content = &state.content;
    let page = &content.pages.case_studies;
    let selected = query.selected();

    let items = filter_by_category(&content.case_studies, selected);

    CaseStudiesTemplate {
        layout: Layout::with_seo(content, "/case-studies", &page.seo),
        page,
        chips: chips(&content.case_studies, selected),
        count_label: result_count(items.len()),
        items,
    }
    .into_response()
}

/// `GET /case-studies/{slug}`
pub async fn case_study_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let content = &state.content;
    let path = format!("/case-studies/{slug}");

    let Some(study) = find_by_slug(&content.case_studies, &slug) else {
        return record_not_found(
            content,
            &path,
            "Case study",
            "/case-studies",
            "Back to case studies",
        );
    };

    let description = study.summary.as_deref().unwrap_or(&study.context);

    CaseStudyDetailTemplate {
        layout: Layout::new(content, &path, &study.title, description),
        study,
        related: related(&content.case_studies, &slug),
    }
    .into_response()
}

/// "All" followed by every category in first-appearance order.
fn chips(catalog: &[CaseStudyRecord], selected: Option<&str>) -> Vec<Chip> {
    let all = Chip {
        label: ALL_CATEGORIES.to_string(),
        href: "/case-studies".to_string(),
        active: selected.is_none(),
    };

    std::iter::once(all)
        .chain(categories(catalog).into_iter().map(|category| Chip {
            label: category.to_string(),
            href: format!(
                "/case-studies?category={}",
                url::form_urlencoded::byte_serialize(category.as_bytes()).collect::<String>()
            ),
            active: selected == Some(category),
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_blank_mean_no_filter() {
        for raw in [None, Some(""), Some("  "), Some("All")] {
            let query = CaseStudiesQuery {
                category: raw.map(str::to_string),
            };
            assert_eq!(query.selected(), None);
        }

        let query = CaseStudiesQuery {
            category: Some("M&E".to_string()),
        };
        assert_eq!(query.selected(), Some("M&E"));
    }
}
