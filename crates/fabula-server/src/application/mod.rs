//! Application Services (Use Cases)

mod character_service;
mod story_service;

pub use character_service::CharacterService;
pub use story_service::StoryService;
