//! Insights listing (with search) and article pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::domain::catalog::{find_by_slug, related, search_posts};
use crate::domain::entities::{ListingPage, PostRecord};
use crate::infrastructure::content::markdown;
use crate::state::AppState;
use crate::web::handlers::record_not_found;
use crate::web::views::{Layout, result_count};

#[derive(Debug, Default, Deserialize)]
pub struct InsightsQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "insights.html")]
pub struct InsightsTemplate<'a> {
    pub layout: Layout<'a>,
    pub page: &'a ListingPage,
    pub query: String,
    pub posts: Vec<&'a PostRecord>,
    pub count_label: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "post_detail.html")]
pub struct PostDetailTemplate<'a> {
    pub layout: Layout<'a>,
    pub post: &'a PostRecord,
    pub body_html: String,
    pub related: Vec<&'a PostRecord>,
}

/// `GET /insights[?q=<text>]`
pub async fn insights_handler(
    State(state): State<AppState>,
    Query(query): Query<InsightsQuery>,
) -> Response {
    let content = &state.content;
    let page = &content.pages.insights;

    let posts = search_posts(&content.posts, &query.q);

    InsightsTemplate {
        layout: Layout::with_seo(content, "/insights", &page.seo),
        page,
        query: query.q.trim().to_string(),
        count_label: result_count(posts.len()),
        posts,
    }
    .into_response()
}

/// `GET /insights/{slug}`
///
/// Shows up to three related articles, same category first.
pub async fn post_detail_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let content = &state.content;
    let path = format!("/insights/{slug}");

    let Some(post) = find_by_slug(&content.posts, &slug) else {
        return record_not_found(content, &path, "Article", "/insights", "Back to insights");
    };

    PostDetailTemplate {
        layout: Layout::new(content, &path, &post.title, &post.excerpt),
        post,
        body_html: markdown::render(&post.body),
        related: related(&content.posts, &slug),
    }
    .into_response()
}
