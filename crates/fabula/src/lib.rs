//! Fabula Domain Library
//!
//! Core domain types and interfaces for the Fabula character story service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Character, GeneratedStory)
//!   - `value_objects/`: Immutable value types (Genre)
//!   - `services/`: Pure domain services (prompt construction)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use fabula::domain::{Character, GeneratedStory, Genre};
//! use fabula::ports::{CharacterRepository, StoryBackend};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Character, DomainError, GeneratedStory, Genre, DETAILS_MAX_LEN, DETAILS_MIN_LEN, NAME_MAX_LEN,
};
pub use ports::{CharacterRepository, GenerationOptions, StoryBackend};
