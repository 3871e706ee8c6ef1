//! Character Application Service (Use Case)
//!
//! Orchestrates character persistence over the repository port.

use std::sync::Arc;
use uuid::Uuid;

use fabula::{Character, CharacterRepository, DomainError};

/// Application service for Character operations
pub struct CharacterService<R: CharacterRepository> {
    repo: Arc<R>,
}

impl<R: CharacterRepository> CharacterService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create and persist a new Character.
    ///
    /// Validation happens in `Character::new`, so nothing reaches the
    /// repository unless both fields pass the trim and length checks.
    pub async fn create(&self, name: &str, details: &str) -> Result<Character, DomainError> {
        let character = Character::new(name, details)?;
        let saved = self.repo.insert(&character).await?;

        tracing::info!("Created character: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Get a Character by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Character, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Character", id))
    }

    /// Get a Character by exact name match
    pub async fn get_by_name(&self, name: &str) -> Result<Character, DomainError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::not_found_by_name("Character", name))
    }

    /// List all Characters (unordered)
    pub async fn list_all(&self) -> Result<Vec<Character>, DomainError> {
        self.repo.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory repository standing in for Postgres
    #[derive(Default)]
    struct InMemoryRepository {
        rows: Mutex<Vec<Character>>,
    }

    #[async_trait]
    impl CharacterRepository for InMemoryRepository {
        async fn insert(&self, character: &Character) -> Result<Character, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            rows.push(character.clone());
            Ok(character.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Character>, DomainError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|c| c.id == id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Character>, DomainError> {
            let rows = self.rows.lock().unwrap();
            // min_by_key keeps the first of equal timestamps, matching the
            // earliest-created tie-break of the Postgres adapter
            Ok(rows
                .iter()
                .filter(|c| c.name == name)
                .min_by_key(|c| c.created_at)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Character>, DomainError> {
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    /// Repository whose writes always fail
    struct BrokenRepository;

    #[async_trait]
    impl CharacterRepository for BrokenRepository {
        async fn insert(&self, _: &Character) -> Result<Character, DomainError> {
            Err(DomainError::Storage("connection refused".to_string()))
        }

        async fn find_by_id(&self, _: Uuid) -> Result<Option<Character>, DomainError> {
            Err(DomainError::Storage("connection refused".to_string()))
        }

        async fn find_by_name(&self, _: &str) -> Result<Option<Character>, DomainError> {
            Err(DomainError::Storage("connection refused".to_string()))
        }

        async fn find_all(&self) -> Result<Vec<Character>, DomainError> {
            Err(DomainError::Storage("connection refused".to_string()))
        }
    }

    fn service() -> CharacterService<InMemoryRepository> {
        CharacterService::new(Arc::new(InMemoryRepository::default()))
    }

    const DETAILS: &str = "A lighthouse keeper afraid of the sea she must cross.";

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let service = service();
        let created = service.create("  Mira  ", &format!("  {DETAILS}  ")).await.unwrap();

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, "Mira");
        assert_eq!(fetched.details, DETAILS);
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_repository() {
        let repo = Arc::new(InMemoryRepository::default());
        let service = CharacterService::new(repo.clone());

        let result = service.create("   ", DETAILS).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_name_finds_exact_match() {
        let service = service();
        service.create("Mira", DETAILS).await.unwrap();

        let found = service.get_by_name("Mira").await.unwrap();
        assert_eq!(found.name, "Mira");
    }

    #[tokio::test]
    async fn missing_character_is_not_found() {
        let service = service();

        let by_name = service.get_by_name("Unknown").await;
        assert!(matches!(by_name, Err(DomainError::NotFound { .. })));

        let by_id = service.get_by_id(Uuid::new_v4()).await;
        assert!(matches!(by_id, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn duplicate_names_resolve_to_earliest_created() {
        let service = service();
        let first = service.create("Mira", DETAILS).await.unwrap();
        service
            .create("Mira", "A second keeper with the same name entirely.")
            .await
            .unwrap();

        let found = service.get_by_name("Mira").await.unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn list_all_returns_every_row() {
        let service = service();
        assert!(service.list_all().await.unwrap().is_empty());

        service.create("Mira", DETAILS).await.unwrap();
        service
            .create("Tomas", "A ferryman who has never learned to swim.")
            .await
            .unwrap();

        assert_eq!(service.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn storage_failures_surface_as_storage_errors() {
        let service = CharacterService::new(Arc::new(BrokenRepository));
        let result = service.create("Mira", DETAILS).await;
        assert!(matches!(result, Err(DomainError::Storage(_))));
    }
}
