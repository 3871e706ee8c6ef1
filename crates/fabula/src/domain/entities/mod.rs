//! Domain Entities
//!
//! - Character: a stored persona that stories are written about
//! - GeneratedStory: a transient generation result, never persisted

pub mod character;
pub mod story;

pub use character::*;
pub use story::*;
