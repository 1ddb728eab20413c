//! Contact form state as rendered by `contact.html`.

use crate::application::services::contact_form::{ContactField, ContactFormController};

/// One input: its current value and validation message, if any.
#[derive(Debug, Clone, Default)]
pub struct FieldView {
    pub value: String,
    pub error: Option<&'static str>,
}

/// One `<option>` of the service-interest select.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormView {
    pub name: FieldView,
    pub email: FieldView,
    pub phone: FieldView,
    pub company: FieldView,
    pub service: FieldView,
    pub message: FieldView,
    pub options: Vec<OptionView>,
    pub error_message: Option<String>,
}

impl From<&ContactFormController> for ContactFormView {
    fn from(form: &ContactFormController) -> Self {
        let fields = form.fields();
        let errors = form.field_errors();
        let field = |key: ContactField, value: &str| FieldView {
            value: value.to_string(),
            error: errors.get(&key).copied(),
        };

        Self {
            name: field(ContactField::Name, &fields.name),
            email: field(ContactField::Email, &fields.email),
            phone: field(ContactField::Phone, &fields.phone),
            company: field(ContactField::Company, &fields.company),
            service: field(ContactField::Service, &fields.service),
            message: field(ContactField::Message, &fields.message),
            options: form
                .service_options()
                .iter()
                .map(|o| OptionView {
                    value: o.value.clone(),
                    label: o.label.clone(),
                    selected: o.value == fields.service,
                })
                .collect(),
            error_message: form.error_message().map(str::to_string),
        }
    }
}
