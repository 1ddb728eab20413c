//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::{HomePage, PostRecord, ServiceRecord};
use crate::state::AppState;
use crate::web::views::Layout;

/// Number of articles teased on the home page.
const LATEST_POSTS: usize = 3;

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub layout: Layout<'a>,
    pub page: &'a HomePage,
    pub services: &'a [ServiceRecord],
    pub posts: &'a [PostRecord],
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Response {
    let content = &state.content;
    let page = &content.pages.home;

    HomeTemplate {
        layout: Layout::with_seo(content, "/", &page.seo),
        page,
        services: &content.services,
        posts: &content.posts[..content.posts.len().min(LATEST_POSTS)],
    }
    .into_response()
}

/// `GET /home` - permanent redirect to `/`.
pub async fn home_redirect_handler() -> Redirect {
    Redirect::permanent("/")
}
