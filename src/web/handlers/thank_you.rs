//! Confirmation page shown after a successful contact submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::domain::entities::ThankYouPage;
use crate::state::AppState;
use crate::web::views::Layout;

#[derive(Template, WebTemplate)]
#[template(path = "thank_you.html")]
pub struct ThankYouTemplate<'a> {
    pub layout: Layout<'a>,
    pub page: &'a ThankYouPage,
}

/// `GET /thank-you`
pub async fn thank_you_handler(State(state): State<AppState>) -> Response {
    let content = &state.content;
    let page = &content.pages.thank_you;

    ThankYouTemplate {
        layout: Layout::with_seo(content, "/thank-you", &page.seo),
        page,
    }
    .into_response()
}
