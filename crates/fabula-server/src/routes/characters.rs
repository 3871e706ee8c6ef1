//! Character Routes
//!
//! HTTP handlers that delegate to CharacterService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::RequestId;
use crate::models::{CharacterResponse, CreateCharacterRequest};
use crate::AppState;

/// Create a new character
#[utoipa::path(
    post,
    path = "/characters/",
    request_body = CreateCharacterRequest,
    responses(
        (status = 201, description = "Character created", body = CharacterResponse),
        (status = 422, description = "Validation failure", body = crate::error::ErrorResponse),
        (status = 500, description = "Database operation failed", body = crate::error::ErrorResponse)
    ),
    tag = "Characters"
)]
pub async fn create_character(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(payload): Json<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<CharacterResponse>), ApiError> {
    let (name, details) = payload
        .validate()
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    let character = state
        .characters
        .create(&name, &details)
        .await
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    Ok((StatusCode::CREATED, Json(character.into())))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    params(
        ("id" = Uuid, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character found", body = CharacterResponse),
        (status = 404, description = "Character not found", body = crate::error::ErrorResponse)
    ),
    tag = "Characters"
)]
pub async fn get_character(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<Uuid>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let character = state
        .characters
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    Ok(Json(character.into()))
}

/// List all characters
#[utoipa::path(
    get,
    path = "/characters/",
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterResponse>),
        (status = 500, description = "Database operation failed", body = crate::error::ErrorResponse)
    ),
    tag = "Characters"
)]
pub async fn list_characters(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<Vec<CharacterResponse>>, ApiError> {
    let characters = state
        .characters
        .list_all()
        .await
        .map_err(|e| ApiError::from_domain(e, request_id))?;

    Ok(Json(characters.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters/", get(list_characters).post(create_character))
        .route("/characters/:id", get(get_character))
}
