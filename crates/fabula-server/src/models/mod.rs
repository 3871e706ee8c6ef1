//! API Data Models
//!
//! Typed request/response contracts. Inbound types expose `validate()`,
//! which trims fields and rejects invalid input before any persistence or
//! backend call is attempted.

mod character;
mod health;
mod story;

pub use character::*;
pub use health::*;
pub use story::*;
