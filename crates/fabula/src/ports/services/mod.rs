//! Service Ports

mod story_backend;

pub use story_backend::*;
