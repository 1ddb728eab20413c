//! Handlers for the read-only listing endpoints.

use axum::{Json, extract::State, response::IntoResponse};

use crate::api::dto::services::{ServicesResponse, WelcomeResponse};
use crate::state::AppState;

/// `GET /api/` - Welcome message, used as a reachability check.
pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(WelcomeResponse {
        message: &state.api_catalog.welcome,
    })
    .into_response()
}

/// `GET /api/services` - The backend's offering list.
pub async fn services_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(ServicesResponse {
        services: &state.api_catalog.services,
    })
    .into_response()
}

/// `GET /api/data-solutions-detail` - Planning phases, benefits and technologies
/// of the data solutions offering.
pub async fn data_solutions_detail_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(&state.api_catalog.data_solutions_detail).into_response()
}
