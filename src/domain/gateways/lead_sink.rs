//! Port for delivering accepted leads.

use async_trait::async_trait;

use crate::domain::entities::Lead;
use crate::error::AppError;

/// Destination for leads accepted by `POST /api/contact`.
///
/// Mail delivery and storage live outside this service; the shipped
/// implementation ([`crate::infrastructure::leads::TracingLeadSink`]) records
/// each lead as a structured log event.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Hands over one lead.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the lead could not be delivered.
    async fn deliver(&self, lead: Lead) -> Result<(), AppError>;
}
