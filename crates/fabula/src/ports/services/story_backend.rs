//! Story Backend Port
//!
//! Abstract interface for the generative-language-model backend. The
//! backend is treated as an opaque call that either returns text or fails;
//! implementations wrap every transport or API failure into
//! `DomainError::Generation` with a human-readable cause.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Options for a single generation call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Sampling temperature (backend default when unset)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate (backend default when unset)
    pub max_output_tokens: Option<u32>,
}

impl GenerationOptions {
    pub fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature: Some(temperature),
            max_output_tokens: Some(max_output_tokens),
        }
    }
}

/// Generation backend interface
///
/// One call per invocation; retries, rate limiting, and streaming are
/// deliberately out of scope.
#[async_trait]
pub trait StoryBackend: Send + Sync {
    /// Generate text for a complete prompt
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, DomainError>;

    /// The model ID being used (for health reporting)
    fn model_id(&self) -> &str;
}
