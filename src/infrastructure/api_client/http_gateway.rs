//! Backend gateway over HTTP.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::{ContactReceipt, ContactRequest};
use crate::domain::gateways::BackendGateway;
use crate::error::ApiError;

use super::ApiClient;

pub const CONTACT_PATH: &str = "/api/contact";
pub const ROOT_PATH: &str = "/api/";

/// Talks to the backend API's JSON endpoints.
pub struct HttpBackendGateway {
    client: ApiClient,
}

impl HttpBackendGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
    async fn submit_contact(&self, request: &ContactRequest) -> Result<ContactReceipt, ApiError> {
        let receipt: ContactReceipt = self.client.post(CONTACT_PATH, request).await?;
        tracing::info!(service = ?request.service, "contact submission accepted by backend");
        Ok(receipt)
    }

    async fn health_check(&self) -> bool {
        match self.client.get::<Value>(ROOT_PATH).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "backend health check failed");
                false
            }
        }
    }
}
