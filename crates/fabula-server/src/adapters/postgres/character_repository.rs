//! PostgreSQL implementation of CharacterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fabula::{Character, CharacterRepository, DomainError};

/// PostgreSQL implementation of CharacterRepository
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CharacterRow {
    id: Uuid,
    name: String,
    details: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            details: row.details,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn insert(&self, character: &Character) -> Result<Character, DomainError> {
        let row = sqlx::query_as::<_, CharacterRow>(
            r#"
            INSERT INTO characters (id, name, details, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(character.id)
        .bind(&character.name)
        .bind(&character.details)
        .bind(character.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Character>, DomainError> {
        let row = sqlx::query_as::<_, CharacterRow>("SELECT * FROM characters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Character>, DomainError> {
        // Duplicate names are allowed; the earliest-created row wins so
        // repeated lookups stay deterministic.
        let row = sqlx::query_as::<_, CharacterRow>(
            r#"
            SELECT * FROM characters
            WHERE name = $1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Character>, DomainError> {
        let rows = sqlx::query_as::<_, CharacterRow>("SELECT * FROM characters")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
