//! Contact submission payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`.
///
/// `website` is the honeypot: always sent, expected to be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
    pub website: String,
}

/// Successful response of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub message: String,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Body of `POST /api/service-inquiry`: a scoped request for a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub project_details: String,
    pub budget_range: String,
    pub timeline: String,
}

/// Which endpoint a lead came in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadSource {
    ContactForm,
    ServiceInquiry,
}

impl LeadSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContactForm => "contact_form",
            Self::ServiceInquiry => "service_inquiry",
        }
    }
}

/// A lead accepted by the contact backend, handed to a
/// [`crate::domain::gateways::LeadSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub source: LeadSource,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
    /// Only set for service inquiries.
    pub budget_range: Option<String>,
    /// Only set for service inquiries.
    pub timeline: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl Lead {
    /// Domain part of the email address, safe to log.
    pub fn email_domain(&self) -> &str {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_optional_fields() {
        let request = ContactRequest {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
            company: Some("Acme".to_string()),
            service: None,
            message: "Need help".to_string(),
            website: String::new(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("service").is_none());
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["website"], "");
    }

    #[test]
    fn test_receipt_without_success_flag() {
        let receipt: ContactReceipt =
            serde_json::from_str(r#"{"message":"Thanks"}"#).unwrap();
        assert_eq!(receipt.message, "Thanks");
        assert_eq!(receipt.success, None);
    }

    #[test]
    fn test_lead_email_domain() {
        let lead = Lead {
            source: LeadSource::ContactForm,
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
            company: None,
            service: None,
            message: "Hi".to_string(),
            budget_range: None,
            timeline: None,
            received_at: Utc::now(),
        };
        assert_eq!(lead.email_domain(), "x.com");
    }
}
