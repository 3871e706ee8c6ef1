//! Character - Stored Story Subject
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Maximum length of a character name, in characters
pub const NAME_MAX_LEN: usize = 100;
/// Minimum length of character details, in characters
pub const DETAILS_MIN_LEN: usize = 10;
/// Maximum length of character details, in characters
pub const DETAILS_MAX_LEN: usize = 2000;

/// Character - the subject stories are generated about
///
/// Name and details are always stored trimmed of surrounding whitespace.
/// Characters are created once and never updated or deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Create a new Character with a generated ID and timestamp.
    ///
    /// Both fields are trimmed before validation; empty-after-trim values
    /// and length-bound violations are rejected before anything can be
    /// persisted.
    pub fn new(name: &str, details: &str) -> Result<Self, DomainError> {
        let name = validate_name(name)?;
        let details = validate_details(details)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            details,
            created_at: Utc::now(),
        })
    }
}

/// Validate and trim a character name
pub fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Name cannot be empty or just whitespace".to_string(),
        ));
    }
    if trimmed.chars().count() > NAME_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "Name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate and trim character details
pub fn validate_details(details: &str) -> Result<String, DomainError> {
    let trimmed = details.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Details cannot be empty or just whitespace".to_string(),
        ));
    }
    let len = trimmed.chars().count();
    if len < DETAILS_MIN_LEN || len > DETAILS_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "Details must be between {DETAILS_MIN_LEN} and {DETAILS_MAX_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_name_and_details() {
        let character =
            Character::new("  Mira  ", "  A lighthouse keeper afraid of the sea.  ").unwrap();
        assert_eq!(character.name, "Mira");
        assert_eq!(character.details, "A lighthouse keeper afraid of the sea.");
    }

    #[test]
    fn whitespace_only_name_rejected() {
        let result = Character::new("   ", "A lighthouse keeper afraid of the sea.");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn whitespace_only_details_rejected() {
        let result = Character::new("Mira", "    ");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn overlong_name_rejected() {
        let name = "x".repeat(NAME_MAX_LEN + 1);
        let result = Character::new(&name, "A lighthouse keeper afraid of the sea.");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn name_at_limit_accepted() {
        let name = "x".repeat(NAME_MAX_LEN);
        let character = Character::new(&name, "A lighthouse keeper afraid of the sea.").unwrap();
        assert_eq!(character.name.chars().count(), NAME_MAX_LEN);
    }

    #[test]
    fn short_details_rejected() {
        let result = Character::new("Mira", "Too short");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn overlong_details_rejected() {
        let details = "x".repeat(DETAILS_MAX_LEN + 1);
        let result = Character::new("Mira", &details);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn length_checked_after_trim() {
        // Padding does not rescue under-length details
        let result = Character::new("Mira", "   short    ");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn each_character_gets_a_fresh_id() {
        let a = Character::new("Mira", "A lighthouse keeper afraid of the sea.").unwrap();
        let b = Character::new("Mira", "A lighthouse keeper afraid of the sea.").unwrap();
        assert_ne!(a.id, b.id);
    }
}
