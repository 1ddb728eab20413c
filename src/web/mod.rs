//! Server-rendered site layer.
//!
//! Every route renders an Askama template from the shared content document.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers, one per route
//! - [`middleware`] - Error boundary around the whole router
//! - [`routes`] - Site route configuration
//! - [`views`] - View models shared by templates (layout, cards, form state)

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
