//! Health Check DTOs

use serde::Serialize;
use utoipa::ToSchema;

/// Liveness payload served at `/`
#[derive(Debug, Serialize, ToSchema)]
pub struct LivenessResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

/// Detailed health payload served at `/health`
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub gemini_ai: String,
}
