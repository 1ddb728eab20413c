//! Outbound HTTP to the backend API.
//!
//! - [`ApiClient`] - JSON client bound to one base URL with a fixed timeout
//! - [`HttpBackendGateway`] - [`crate::domain::gateways::BackendGateway`] over [`ApiClient`]

pub mod client;
pub mod http_gateway;

pub use client::{ApiClient, REQUEST_TIMEOUT};
pub use http_gateway::HttpBackendGateway;
