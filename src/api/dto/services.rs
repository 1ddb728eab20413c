//! DTOs for the listing endpoints.

use serde::Serialize;

use crate::domain::entities::Offering;

/// Body of `GET /api/services`.
#[derive(Debug, Serialize)]
pub struct ServicesResponse<'a> {
    pub services: &'a [Offering],
}

/// Body of `GET /api/`.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse<'a> {
    pub message: &'a str,
}
