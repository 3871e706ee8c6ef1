//! Story Routes
//!
//! HTTP handlers for on-demand story generation. Stories are never
//! persisted; each request produces a fresh result.

use axum::{extract::State, routing::post, Extension, Json, Router};

use crate::error::ApiError;
use crate::middleware::RequestId;
use crate::models::{GenerateStoryRequest, ImproveStoryRequest, StoryResponse};
use crate::AppState;

/// Generate a story for a character, looked up by name
#[utoipa::path(
    post,
    path = "/stories/generate/",
    request_body = GenerateStoryRequest,
    responses(
        (status = 200, description = "Story generated", body = StoryResponse),
        (status = 404, description = "Character not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Story generation failed", body = crate::error::ErrorResponse)
    ),
    tag = "Stories"
)]
pub async fn generate_story(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(payload): Json<GenerateStoryRequest>,
) -> Result<Json<StoryResponse>, ApiError> {
    let (name, genre) = payload
        .validate()
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    let character = state
        .characters
        .get_by_name(&name)
        .await
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    let story = state
        .stories
        .generate(&character, genre)
        .await
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    Ok(Json(story.into()))
}

/// Rewrite a previously generated story according to feedback
#[utoipa::path(
    post,
    path = "/stories/improve/",
    request_body = ImproveStoryRequest,
    responses(
        (status = 200, description = "Story improved", body = StoryResponse),
        (status = 404, description = "Character not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Story generation failed", body = crate::error::ErrorResponse)
    ),
    tag = "Stories"
)]
pub async fn improve_story(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(payload): Json<ImproveStoryRequest>,
) -> Result<Json<StoryResponse>, ApiError> {
    let (name, old_story, feedback) = payload
        .validate()
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    let character = state
        .characters
        .get_by_name(&name)
        .await
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    let story = state
        .stories
        .improve(&character, &old_story, &feedback)
        .await
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    Ok(Json(story.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stories/generate/", post(generate_story))
        .route("/stories/improve/", post(improve_story))
}
