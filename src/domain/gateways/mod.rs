//! Port traits for the contact pipeline.
//!
//! Implementations live in [`crate::infrastructure`]; mock implementations are
//! generated with `mockall` for unit tests.
//!
//! - [`BackendGateway`] - Delivers contact submissions to the backend API
//! - [`LeadSink`] - Receives leads accepted by the contact endpoint

pub mod backend_gateway;
pub mod lead_sink;

pub use backend_gateway::BackendGateway;
pub use lead_sink::LeadSink;

#[cfg(test)]
pub use backend_gateway::MockBackendGateway;
#[cfg(test)]
pub use lead_sink::MockLeadSink;
