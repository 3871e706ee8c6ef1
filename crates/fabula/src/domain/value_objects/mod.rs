//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod genre;

pub use genre::*;
