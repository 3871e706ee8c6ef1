//! Domain Services
//!
//! Stateless domain logic that does not belong to a single entity.

pub mod prompt;
