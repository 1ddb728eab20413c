//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Content**: Catalog sizes of the loaded document
/// 2. **Backend**: `GET /api/` through the configured API client
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "content": { "status": "ok", "message": "7 services, 2 case studies, 3 posts" },
///     "backend": { "status": "ok", "message": "Backend reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let content_check = check_content(&state);
    let backend_check = check_backend(&state).await;

    let all_healthy = content_check.is_ok() && backend_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            content: content_check,
            backend: backend_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_content(state: &AppState) -> CheckStatus {
    let content = &state.content;
    if content.services.is_empty() {
        return CheckStatus::error("No services loaded");
    }

    CheckStatus::ok(format!(
        "{} services, {} case studies, {} posts",
        content.services.len(),
        content.case_studies.len(),
        content.posts.len()
    ))
}

async fn check_backend(state: &AppState) -> CheckStatus {
    if state.backend.health_check().await {
        CheckStatus::ok("Backend reachable")
    } else {
        CheckStatus::error("Backend unreachable")
    }
}
