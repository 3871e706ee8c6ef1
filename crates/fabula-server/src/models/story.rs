//! Story Request/Response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use fabula::domain::entities::validate_name;
use fabula::{DomainError, GeneratedStory, Genre};

/// Generate story request.
///
/// `genre` is optional; anything outside the recognized set (or an absent
/// field) selects the general prompt.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateStoryRequest {
    pub name: String,
    pub genre: Option<String>,
}

impl GenerateStoryRequest {
    /// Trim and validate, resolving the genre selector
    pub fn validate(&self) -> Result<(String, Genre), DomainError> {
        let name = validate_name(&self.name)?;
        let genre = self
            .genre
            .as_deref()
            .map(Genre::parse)
            .unwrap_or_default();
        Ok((name, genre))
    }
}

/// Improve story request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImproveStoryRequest {
    pub name: String,
    pub story: String,
    pub feedback: String,
}

impl ImproveStoryRequest {
    /// Trim and validate all three fields
    pub fn validate(&self) -> Result<(String, String, String), DomainError> {
        let name = validate_name(&self.name)?;

        let story = self.story.trim();
        if story.is_empty() {
            return Err(DomainError::Validation(
                "Story cannot be empty or just whitespace".to_string(),
            ));
        }

        let feedback = self.feedback.trim();
        if feedback.is_empty() {
            return Err(DomainError::Validation(
                "Feedback cannot be empty or just whitespace".to_string(),
            ));
        }

        Ok((name, story.to_string(), feedback.to_string()))
    }
}

/// Story response
#[derive(Debug, Serialize, ToSchema)]
pub struct StoryResponse {
    pub story: String,
    pub character_name: String,
    pub word_count: usize,
}

impl From<GeneratedStory> for StoryResponse {
    fn from(story: GeneratedStory) -> Self {
        Self {
            story: story.story,
            character_name: story.character_name,
            word_count: story.word_count,
        }
    }
}
