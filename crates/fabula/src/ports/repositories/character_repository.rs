//! Character Repository Port
//!
//! Abstract interface for Character persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Character};

/// Repository interface for Character entities
///
/// Absence is reported as `Ok(None)`; `DomainError::Storage` is reserved
/// for persistence-layer failures distinct from absence.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Persist a new Character, returning the stored row
    async fn insert(&self, character: &Character) -> Result<Character, DomainError>;

    /// Find a Character by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Character>, DomainError>;

    /// Find a Character by exact name match.
    ///
    /// When several rows share a name, implementations must return the
    /// earliest-created one so repeated lookups are deterministic.
    async fn find_by_name(&self, name: &str) -> Result<Option<Character>, DomainError>;

    /// Find all Characters
    async fn find_all(&self) -> Result<Vec<Character>, DomainError>;
}
