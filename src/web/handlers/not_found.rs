//! Not-found pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::domain::content::ContentDocument;
use crate::state::AppState;
use crate::web::views::Layout;

/// Catch-all page for unknown routes.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub layout: Layout<'a>,
    pub path: String,
}

/// A detail route whose slug matched nothing.
#[derive(Template, WebTemplate)]
#[template(path = "record_not_found.html")]
pub struct RecordNotFoundTemplate<'a> {
    pub layout: Layout<'a>,
    pub kind: &'static str,
    pub back_path: &'static str,
    pub back_label: &'static str,
}

/// Router fallback.
pub async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let content = &state.content;
    tracing::debug!(path = %uri.path(), "no route matched");

    let template = NotFoundTemplate {
        layout: Layout::new(
            content,
            uri.path(),
            "Page not found",
            "The page you are looking for does not exist.",
        ),
        path: uri.path().to_string(),
    };

    (StatusCode::NOT_FOUND, template).into_response()
}

/// 404 page for an unknown slug, linking back to the listing at `back_path`.
pub fn record_not_found(
    content: &ContentDocument,
    current_path: &str,
    kind: &'static str,
    back_path: &'static str,
    back_label: &'static str,
) -> Response {
    let template = RecordNotFoundTemplate {
        layout: Layout::new(
            content,
            current_path,
            "Not found",
            "The requested page could not be found.",
        ),
        kind,
        back_path,
        back_label,
    };

    (StatusCode::NOT_FOUND, template).into_response()
}
