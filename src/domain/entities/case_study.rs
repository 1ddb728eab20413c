//! Case study catalog record.

use serde::{Deserialize, Serialize};

use super::{Icon, Media};

/// An anonymized project write-up, published at `/case-studies/{slug}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyRecord {
    pub slug: String,
    pub category: String,
    pub title: String,
    pub icon: Icon,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cover: Option<Media>,
    pub context: String,
    pub problem: Vec<String>,
    pub approach: Vec<String>,
    pub deliverables: Vec<String>,
    pub outcomes: Vec<String>,
    pub timeline: String,
}
