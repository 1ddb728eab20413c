//! Offerings published by the backend API.
//!
//! These predate the site's content catalog and keep their own wire shape.

use serde::{Deserialize, Serialize};

/// Everything the backend's listing endpoints serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCatalog {
    pub welcome: String,
    pub services: Vec<Offering>,
    pub data_solutions_detail: DataSolutionsDetail,
}

/// One entry of `GET /api/services`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_services: Option<Vec<OfferingDetail>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingDetail {
    pub name: String,
    pub description: String,
}

/// Body of `GET /api/data-solutions-detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSolutionsDetail {
    pub title: String,
    pub subtitle: String,
    pub overview: String,
    pub planning_phases: Vec<PlanningPhase>,
    pub key_benefits: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningPhase {
    pub phase: String,
    pub description: String,
    pub deliverables: Vec<String>,
}
