//! Service listing and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::domain::catalog::find_by_slug;
use crate::domain::entities::{ListingPage, ServiceRecord};
use crate::state::AppState;
use crate::web::handlers::record_not_found;
use crate::web::views::Layout;

#[derive(Template, WebTemplate)]
#[template(path = "services.html")]
pub struct ServicesTemplate<'a> {
    pub layout: Layout<'a>,
    pub page: &'a ListingPage,
    pub services: &'a [ServiceRecord],
}

#[derive(Template, WebTemplate)]
#[template(path = "service_detail.html")]
pub struct ServiceDetailTemplate<'a> {
    pub layout: Layout<'a>,
    pub service: &'a ServiceRecord,
    pub others: Vec<&'a ServiceRecord>,
}

/// `GET /services`
pub async fn services_handler(State(state): State<AppState>) -> Response {
    let content = &state.content;
    let page = &content.pages.services;

    ServicesTemplate {
        layout: Layout::with_seo(content, "/services", &page.seo),
        page,
        services: &content.services,
    }
    .into_response()
}

/// `GET /services/{slug}`
///
/// Renders the not-found state with a link back to `/services` when the slug
/// is unknown.
pub async fn service_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let content = &state.content;
    let path = format!("/services/{slug}");

    let Some(service) = find_by_slug(&content.services, &slug) else {
        return record_not_found(content, &path, "Service", "/services", "Back to services");
    };

    let others = content
        .services
        .iter()
        .filter(|s| s.slug != service.slug)
        .take(3)
        .collect();

    ServiceDetailTemplate {
        layout: Layout::new(content, &path, &service.title, &service.one_liner),
        service,
        others,
    }
    .into_response()
}
