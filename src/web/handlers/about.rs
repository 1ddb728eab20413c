//! About page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::domain::entities::AboutPage;
use crate::state::AppState;
use crate::web::views::Layout;

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub layout: Layout<'a>,
    pub page: &'a AboutPage,
}

/// `GET /about`
pub async fn about_handler(State(state): State<AppState>) -> Response {
    let content = &state.content;
    let page = &content.pages.about;

    AboutTemplate {
        layout: Layout::with_seo(content, "/about", &page.seo),
        page,
    }
    .into_response()
}
