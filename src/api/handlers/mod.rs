//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod contact;
pub mod health;
pub mod service_inquiry;
pub mod services;

pub use contact::contact_handler;
pub use health::health_handler;
pub use service_inquiry::service_inquiry_handler;
pub use services::{data_solutions_detail_handler, root_handler, services_handler};
