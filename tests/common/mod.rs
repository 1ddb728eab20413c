#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use mstatili_site::api::middleware::rate_limit::RateLimitMode;
use mstatili_site::domain::entities::{ContactReceipt, ContactRequest, Lead};
use mstatili_site::domain::gateways::{BackendGateway, LeadSink};
use mstatili_site::error::{ApiError, AppError};
use mstatili_site::infrastructure::api_client::{ApiClient, HttpBackendGateway};
use mstatili_site::infrastructure::content::{load_api_catalog, load_document};
use mstatili_site::routes::app_router;
use mstatili_site::state::AppState;
use mstatili_site::web::routes::PAGE_PATHS;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Backend that accepts every submission and records it.
#[derive(Default)]
pub struct RecordingBackend {
    pub submissions: Mutex<Vec<ContactRequest>>,
    pub reachable: bool,
}

impl RecordingBackend {
    pub fn reachable() -> Arc<Self> {
        Arc::new(Self {
            submissions: Mutex::new(Vec::new()),
            reachable: true,
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn submitted(&self) -> Vec<ContactRequest> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendGateway for RecordingBackend {
    async fn submit_contact(&self, request: &ContactRequest) -> Result<ContactReceipt, ApiError> {
        self.submissions.lock().unwrap().push(request.clone());
        Ok(ContactReceipt {
            message: "Thank you".to_string(),
            success: Some(true),
        })
    }

    async fn health_check(&self) -> bool {
        self.reachable
    }
}

/// Lead sink that keeps every delivered lead in memory.
#[derive(Default)]
pub struct RecordingSink {
    pub leads: Mutex<Vec<Lead>>,
}

impl RecordingSink {
    pub fn delivered(&self) -> Vec<Lead> {
        self.leads.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadSink for RecordingSink {
    async fn deliver(&self, lead: Lead) -> Result<(), AppError> {
        self.leads.lock().unwrap().push(lead);
        Ok(())
    }
}

/// State over the bundled content with the given ports.
pub fn create_test_state(backend: Arc<dyn BackendGateway>, sink: Arc<dyn LeadSink>) -> AppState {
    let content = load_document(None, PAGE_PATHS).unwrap();
    let api_catalog = load_api_catalog().unwrap();
    AppState::new(content, api_catalog, backend, sink)
}

/// Full application router, rate limiting off.
pub fn create_test_app(backend: Arc<dyn BackendGateway>, sink: Arc<dyn LeadSink>) -> Router {
    let state = create_test_state(backend, sink);
    app_router(state, RateLimitMode::Disabled, "static")
}

/// Test server over a recording backend and sink.
pub fn create_test_server() -> (TestServer, Arc<RecordingBackend>, Arc<RecordingSink>) {
    let backend = RecordingBackend::reachable();
    let sink = Arc::new(RecordingSink::default());
    let app = create_test_app(backend.clone(), sink.clone());
    (TestServer::new(app).unwrap(), backend, sink)
}

/// Test server whose contact page talks to `backend_url` over HTTP.
pub fn create_server_with_backend(backend_url: &str, timeout: Duration) -> TestServer {
    let client = ApiClient::with_timeout(backend_url, timeout).unwrap();
    let backend = Arc::new(HttpBackendGateway::new(client));
    let app = create_test_app(backend, Arc::new(RecordingSink::default()));
    TestServer::new(app).unwrap()
}

/// A form body that passes validation.
pub fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Jane Wanjiku"),
        ("email", "jane@example.org"),
        ("phone", ""),
        ("company", "Acme Ltd"),
        ("service", ""),
        ("message", "We need a monthly reporting pack."),
        ("website", ""),
    ]
}
