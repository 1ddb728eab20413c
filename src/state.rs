//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DeduplicatingBackend, LeadIntakeService};
use crate::domain::content::ContentDocument;
use crate::domain::entities::ApiCatalog;
use crate::domain::gateways::{BackendGateway, LeadSink};

/// Cloned per request; every field is behind an `Arc`.
///
/// The content document and the API catalog are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Site copy and the three record catalogs.
    pub content: Arc<ContentDocument>,
    /// Offerings served by the `/api/services` endpoints.
    pub api_catalog: Arc<ApiCatalog>,
    /// Used by the contact page to submit leads. Repeated identical
    /// submissions are answered without reaching the backend.
    pub backend: Arc<dyn BackendGateway>,
    /// Handles leads posted to `/api/contact`.
    pub lead_intake: Arc<LeadIntakeService>,
}

impl AppState {
    pub fn new(
        content: ContentDocument,
        api_catalog: ApiCatalog,
        backend: Arc<dyn BackendGateway>,
        lead_sink: Arc<dyn LeadSink>,
    ) -> Self {
        Self {
            content: Arc::new(content),
            api_catalog: Arc::new(api_catalog),
            backend: Arc::new(DeduplicatingBackend::new(backend)),
            lead_intake: Arc::new(LeadIntakeService::new(lead_sink)),
        }
    }
}
