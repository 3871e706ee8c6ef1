//! Health Routes

use axum::{extract::State, routing::get, Extension, Json, Router};

use crate::error::ApiError;
use crate::middleware::RequestId;
use crate::models::{HealthResponse, LivenessResponse};
use crate::AppState;

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = LivenessResponse)
    ),
    tag = "Health"
)]
pub async fn root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Character Story Generator API".to_string(),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Detailed health check with a database probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service unhealthy", body = crate::error::ErrorResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<HealthResponse>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::unhealthy(e.to_string(), request_id))?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        gemini_ai: "configured".to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
