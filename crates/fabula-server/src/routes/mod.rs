//! HTTP Routes
//!
//! Handlers delegate to the application services; every fallible handler
//! returns `Result<_, ApiError>` so failures always leave through the
//! error mapper.

pub mod characters;
pub mod health;
pub mod stories;
pub mod swagger;
