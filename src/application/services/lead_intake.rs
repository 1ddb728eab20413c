//! Acceptance of leads posted to the contact and service inquiry endpoints.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{ContactRequest, Lead, LeadSource, ServiceInquiry};
use crate::domain::gateways::LeadSink;
use crate::error::AppError;

/// What happened to an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Handed to the lead sink.
    Delivered,
    /// The honeypot was filled in; answered as success but dropped.
    Discarded,
}

/// Turns validated contact requests and service inquiries into leads.
pub struct LeadIntakeService {
    sink: Arc<dyn LeadSink>,
}

impl LeadIntakeService {
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self { sink }
    }

    /// Accepts one contact request.
    ///
    /// Bots that fill the hidden `website` field get the same answer as real
    /// visitors, but nothing reaches the sink.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if delivery fails.
    pub async fn accept(&self, request: ContactRequest) -> Result<IntakeOutcome, AppError> {
        if !request.website.trim().is_empty() {
            tracing::info!("contact submission discarded by honeypot");
            return Ok(IntakeOutcome::Discarded);
        }

        let lead = Lead {
            source: LeadSource::ContactForm,
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: non_blank(request.phone),
            company: non_blank(request.company),
            service: non_blank(request.service),
            message: request.message.trim().to_string(),
            budget_range: None,
            timeline: None,
            received_at: Utc::now(),
        };

        self.sink.deliver(lead).await?;
        Ok(IntakeOutcome::Delivered)
    }

    /// Accepts one service inquiry. Inquiries carry no honeypot, so every
    /// valid one is delivered.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if delivery fails.
    pub async fn accept_inquiry(
        &self,
        inquiry: ServiceInquiry,
    ) -> Result<IntakeOutcome, AppError> {
        let lead = Lead {
            source: LeadSource::ServiceInquiry,
            name: inquiry.name.trim().to_string(),
            email: inquiry.email.trim().to_string(),
            phone: non_blank(Some(inquiry.phone)),
            company: None,
            service: non_blank(Some(inquiry.service_type)),
            message: inquiry.project_details.trim().to_string(),
            budget_range: non_blank(Some(inquiry.budget_range)),
            timeline: non_blank(Some(inquiry.timeline)),
            received_at: Utc::now(),
        };

        self.sink.deliver(lead).await?;
        Ok(IntakeOutcome::Delivered)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
