//! Service catalog record.

use serde::{Deserialize, Serialize};

use super::{Icon, Media};

/// A service offering, published at `/services/{slug}`.
///
/// `slug` is the permalink key: unique within the catalog, URL-safe, and
/// never changed once published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub slug: String,
    pub title: String,
    pub icon: Icon,
    pub one_liner: String,
    #[serde(default)]
    pub media: Option<Media>,
    pub who_its_for: Vec<String>,
    pub problems: Vec<String>,
    pub deliverables: Vec<String>,
    pub approach_steps: Vec<String>,
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

/// A question and answer pair shown on a service page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
