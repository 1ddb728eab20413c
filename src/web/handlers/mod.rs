//! HTML template rendering handlers for the site.

mod about;
mod case_studies;
mod contact;
mod home;
mod insights;
mod not_found;
mod services;
mod thank_you;

pub use about::about_handler;
pub use case_studies::{case_studies_handler, case_study_detail_handler};
pub use contact::{
    ContactFormInput, contact_form_handler, contact_submit_handler, render_rejected,
};
pub use home::{home_handler, home_redirect_handler};
pub use insights::{insights_handler, post_detail_handler};
pub use not_found::{not_found_handler, record_not_found};
pub use services::{service_detail_handler, services_handler};
pub use thank_you::thank_you_handler;
