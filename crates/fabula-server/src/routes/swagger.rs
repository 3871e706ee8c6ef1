//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    CharacterResponse, CreateCharacterRequest, GenerateStoryRequest, HealthResponse,
    ImproveStoryRequest, LivenessResponse, StoryResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        super::health::root,
        super::health::health_check,
        // Character endpoints
        super::characters::create_character,
        super::characters::get_character,
        super::characters::list_characters,
        // Story endpoints
        super::stories::generate_story,
        super::stories::improve_story,
    ),
    info(
        title = "Character Story Generator API",
        version = "2.0.0",
        description = "An API for creating characters and generating stories about them",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Characters", description = "Character persistence"),
        (name = "Stories", description = "On-demand story generation"),
    ),
    components(
        schemas(
            // Characters
            CreateCharacterRequest,
            CharacterResponse,
            // Stories
            GenerateStoryRequest,
            ImproveStoryRequest,
            StoryResponse,
            // Health
            LivenessResponse,
            HealthResponse,
            // Errors
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
