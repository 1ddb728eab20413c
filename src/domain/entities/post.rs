//! Insights article record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Icon;

/// An article, published at `/insights/{slug}`.
///
/// `date` is used for display only; the catalog keeps its authored order.
/// `body` is markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub reading_time: Option<String>,
    pub category: String,
    pub icon: Icon,
    pub excerpt: String,
    pub body: String,
}
