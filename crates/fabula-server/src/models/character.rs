//! Character Request/Response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use fabula::domain::entities::{validate_details, validate_name};
use fabula::{Character, DomainError};

/// Create character request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub details: String,
}

impl CreateCharacterRequest {
    /// Trim and validate both fields, returning them ready for persistence
    pub fn validate(&self) -> Result<(String, String), DomainError> {
        let name = validate_name(&self.name)?;
        let details = validate_details(&self.details)?;
        Ok((name, details))
    }
}

/// Character response
#[derive(Debug, Serialize, ToSchema)]
pub struct CharacterResponse {
    pub id: Uuid,
    pub name: String,
    pub details: String,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
            details: character.details,
        }
    }
}
