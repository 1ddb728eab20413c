//! Lead sink that records each lead as a structured log event.

use async_trait::async_trait;

use crate::domain::entities::Lead;
use crate::domain::gateways::LeadSink;
use crate::error::AppError;

/// Emits one `INFO` event per lead on the `leads` target.
///
/// Only the email domain is logged; downstream log shipping picks the events
/// up for follow-up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLeadSink;

#[async_trait]
impl LeadSink for TracingLeadSink {
    async fn deliver(&self, lead: Lead) -> Result<(), AppError> {
        tracing::info!(
            target: "leads",
            source = lead.source.as_str(),
            email_domain = lead.email_domain(),
            company = lead.company.as_deref().unwrap_or("-"),
            service = lead.service.as_deref().unwrap_or("-"),
            has_phone = lead.phone.is_some(),
            budget_range = lead.budget_range.as_deref().unwrap_or("-"),
            timeline = lead.timeline.as_deref().unwrap_or("-"),
            message_len = lead.message.chars().count(),
            received_at = %lead.received_at.to_rfc3339(),
            "New lead received"
        );
        Ok(())
    }
}
