//! Server-side suppression of repeated contact submissions.
//!
//! The contact page disables its submit button while a request is in flight,
//! but that needs script. A double-clicked or resent form without script
//! still posts twice; this gateway decorator keeps the second identical
//! request from reaching the backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::domain::entities::{ContactReceipt, ContactRequest};
use crate::domain::gateways::BackendGateway;
use crate::error::ApiError;

/// How long an identical submission counts as a repeat.
pub const DUPLICATE_WINDOW: Duration = Duration::from_secs(60);

/// Receipt message for a suppressed repeat.
pub const DUPLICATE_RECEIPT: &str = "Already received";

/// Wraps a [`BackendGateway`] and forwards each distinct request once per
/// window.
///
/// A repeat is answered with a successful receipt, so the visitor lands on the
/// confirmation page either way. A failed submission is forgotten at once so
/// the visitor can retry.
pub struct DeduplicatingBackend {
    inner: Arc<dyn BackendGateway>,
    window: Duration,
    recent: Mutex<HashMap<ContactRequest, Instant>>,
}

impl DeduplicatingBackend {
    pub fn new(inner: Arc<dyn BackendGateway>) -> Self {
        Self::with_window(inner, DUPLICATE_WINDOW)
    }

    pub fn with_window(inner: Arc<dyn BackendGateway>, window: Duration) -> Self {
        Self {
            inner,
            window,
            recent: Mutex::new(HashMap::new()),
        }
    }

    /// Records `request` and returns `false` if it was already seen within the
    /// window.
    fn claim(&self, request: &ContactRequest) -> bool {
        let now = Instant::now();
        let mut recent = self.recent.lock().unwrap_or_else(PoisonError::into_inner);
        recent.retain(|_, seen| now.duration_since(*seen) < self.window);

        if recent.contains_key(request) {
            return false;
        }
        recent.insert(request.clone(), now);
        true
    }

    fn release(&self, request: &ContactRequest) {
        self.recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(request);
    }
}

#[async_trait]
impl BackendGateway for DeduplicatingBackend {
    async fn submit_contact(&self, request: &ContactRequest) -> Result<ContactReceipt, ApiError> {
        if !self.claim(request) {
            tracing::info!("repeated contact submission suppressed");
            return Ok(ContactReceipt {
                message: DUPLICATE_RECEIPT.to_string(),
                success: Some(true),
            });
        }

        let result = self.inner.submit_contact(request).await;
        if result.is_err() {
            self.release(request);
        }
        result
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockBackendGateway;

    fn request(message: &str) -> ContactRequest {
        ContactRequest {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
            company: None,
            service: None,
            message: message.to_string(),
            website: String::new(),
        }
    }

    fn receipt() -> ContactReceipt {
        ContactReceipt {
            message: "Thanks".to_string(),
            success: Some(true),
        }
    }

    #[tokio::test]
    async fn test_identical_request_reaches_backend_once() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_submit_contact()
            .times(1)
            .returning(|_| Ok(receipt()));

        let guard = DeduplicatingBackend::new(Arc::new(backend));
        let first = guard.submit_contact(&request("Need help")).await.unwrap();
        let second = guard.submit_contact(&request("Need help")).await.unwrap();

        assert_eq!(first.message, "Thanks");
        assert_eq!(second.message, DUPLICATE_RECEIPT);
        assert_eq!(second.success, Some(true));
    }

    #[tokio::test]
    async fn test_different_requests_are_both_forwarded() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_submit_contact()
            .times(2)
            .returning(|_| Ok(receipt()));

        let guard = DeduplicatingBackend::new(Arc::new(backend));
        guard.submit_contact(&request("First")).await.unwrap();
        guard.submit_contact(&request("Second")).await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_request_can_be_retried() {
        let mut backend = MockBackendGateway::new();
        let mut seq = mockall::Sequence::new();
        backend
            .expect_submit_contact()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ApiError::Network("connection refused".to_string())));
        backend
            .expect_submit_contact()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(receipt()));

        let guard = DeduplicatingBackend::new(Arc::new(backend));
        assert!(guard.submit_contact(&request("Need help")).await.is_err());
        let retried = guard.submit_contact(&request("Need help")).await.unwrap();

        assert_eq!(retried.message, "Thanks");
    }

    #[tokio::test]
    async fn test_repeat_after_window_is_forwarded() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_submit_contact()
            .times(2)
            .returning(|_| Ok(receipt()));

        let guard = DeduplicatingBackend::with_window(Arc::new(backend), Duration::ZERO);
        guard.submit_contact(&request("Need help")).await.unwrap();
        guard.submit_contact(&request("Need help")).await.unwrap();
    }

    #[tokio::test]
    async fn test_health_check_delegates() {
        let mut backend = MockBackendGateway::new();
        backend.expect_health_check().times(1).returning(|| false);

        let guard = DeduplicatingBackend::new(Arc::new(backend));
        assert!(!guard.health_check().await);
    }
}
