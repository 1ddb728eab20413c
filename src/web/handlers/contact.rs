//! Contact page: form rendering and submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::application::services::contact_form::{
    ContactField, ContactFormController, SubmitOutcome, service_options,
};
use crate::domain::content::ContentDocument;
use crate::domain::entities::{ContactChannels, ContactPage};
use crate::state::AppState;
use crate::web::views::{ContactFormView, Layout};

#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    pub service: Option<String>,
}

/// Fields posted by the contact form. Missing fields count as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub website: String,
}

impl ContactFormInput {
    /// Reads an `application/x-www-form-urlencoded` body. Unknown keys are
    /// skipped; a repeated key keeps its last value.
    pub fn from_form_body(body: &[u8]) -> Self {
        let mut input = Self::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            let slot = match key.as_ref() {
                "name" => &mut input.name,
                "email" => &mut input.email,
                "phone" => &mut input.phone,
                "company" => &mut input.company,
                "service" => &mut input.service,
                "message" => &mut input.message,
                "website" => &mut input.website,
                _ => continue,
            };
            *slot = value.into_owned();
        }
        input
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub layout: Layout<'a>,
    pub page: &'a ContactPage,
    pub contacts: &'a ContactChannels,
    pub form: ContactFormView,
}

/// `GET /contact[?service=<slug>]`
///
/// A `service` naming one of the offered options is preselected; anything
/// else is ignored.
pub async fn contact_form_handler(
    State(state): State<AppState>,
    Query(query): Query<ContactQuery>,
) -> Response {
    let content = &state.content;
    let mut form = ContactFormController::new(service_options(&content.services));

    if let Some(service) = query.service.as_deref() {
        form.preselect_service(service);
    }

    render(content, &form, StatusCode::OK)
}

/// `POST /contact`
///
/// # Responses
///
/// - **303 See Other** to `/thank-you` when the backend accepted the lead
/// - **422 Unprocessable Entity** with field errors when validation failed;
///   the backend is not called
/// - **200 OK** with the form and an inline error when the backend call
///   failed; the visitor's input is kept
pub async fn contact_submit_handler(
    State(state): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> Response {
    let content = &state.content;
    let mut form = filled_form(content, input);

    match form.submit(state.backend.as_ref()).await {
        SubmitOutcome::Succeeded { redirect_to } => {
            tracing::info!("contact form submitted");
            Redirect::to(redirect_to).into_response()
        }
        SubmitOutcome::Invalid => {
            tracing::debug!(fields = ?form.field_errors().keys().collect::<Vec<_>>(), "contact form rejected");
            render(content, &form, StatusCode::UNPROCESSABLE_ENTITY)
        }
        SubmitOutcome::Failed | SubmitOutcome::Ignored => render(content, &form, StatusCode::OK),
    }
}

/// Re-renders a submission that never reached the handler, keeping the
/// visitor's input and showing `message` inline.
pub fn render_rejected(
    content: &ContentDocument,
    input: ContactFormInput,
    message: &str,
    status: StatusCode,
) -> Response {
    let mut form = filled_form(content, input);
    form.reject(message);
    render(content, &form, status)
}

fn filled_form(content: &ContentDocument, input: ContactFormInput) -> ContactFormController {
    let mut form = ContactFormController::new(service_options(&content.services));

    form.set_field(ContactField::Name, input.name);
    form.set_field(ContactField::Email, input.email);
    form.set_field(ContactField::Phone, input.phone);
    form.set_field(ContactField::Company, input.company);
    form.set_field(ContactField::Service, input.service);
    form.set_field(ContactField::Message, input.message);
    form.set_field(ContactField::Website, input.website);

    form
}

fn render(content: &ContentDocument, form: &ContactFormController, status: StatusCode) -> Response {
    let page = &content.pages.contact;

    let template = ContactTemplate {
        layout: Layout::with_seo(content, "/contact", &page.seo),
        page,
        contacts: &content.company.contacts,
        form: ContactFormView::from(form),
    };

    (status, template).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_decodes_known_fields() {
        let input = ContactFormInput::from_form_body(
            b"name=Jane+Doe&email=jane%40x.com&message=Need%20help%21&extra=1&name=Jane",
        );

        assert_eq!(input.name, "Jane");
        assert_eq!(input.email, "jane@x.com");
        assert_eq!(input.message, "Need help!");
        assert_eq!(input.company, "");
    }

    #[test]
    fn test_empty_form_body_is_blank_input() {
        let input = ContactFormInput::from_form_body(b"");
        assert_eq!(input.name, "");
        assert_eq!(input.website, "");
    }
}
