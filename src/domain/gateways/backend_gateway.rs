//! Port for the contact-processing backend.

use async_trait::async_trait;

use crate::domain::entities::{ContactReceipt, ContactRequest};
use crate::error::ApiError;

/// The backend the contact form submits to.
///
/// # Implementations
///
/// - [`crate::infrastructure::api_client::HttpBackendGateway`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Submits one contact request. Exactly one attempt is made.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] if the backend could not be reached in time
    /// - [`ApiError::Http`] if the backend rejected the request
    /// - [`ApiError::Decode`] if the success body was not a receipt
    async fn submit_contact(&self, request: &ContactRequest) -> Result<ContactReceipt, ApiError>;

    /// Checks whether the backend answers at all.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
