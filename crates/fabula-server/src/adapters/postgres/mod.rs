//! PostgreSQL Adapters

mod character_repository;

pub use character_repository::PgCharacterRepository;
