//! Story Application Service (Use Case)
//!
//! Orchestrates prompt construction and the backend call. Stateless between
//! invocations: no session, no conversation memory, no retries.

use std::sync::Arc;

use fabula::domain::services::prompt;
use fabula::{Character, DomainError, GeneratedStory, GenerationOptions, Genre, StoryBackend};

/// Moderate creativity without going off the rails
const GENERATION_TEMPERATURE: f32 = 0.7;
/// Enough room for a 1000-1200 word story
const GENERATION_MAX_TOKENS: u32 = 1500;
/// Below this the result is logged as short, but still returned
const SHORT_STORY_WORDS: usize = 300;

/// Application service for story generation
pub struct StoryService<B: StoryBackend> {
    backend: Arc<B>,
}

impl<B: StoryBackend> StoryService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Generate a story about a character.
    ///
    /// A single backend attempt is made. Empty output is a
    /// `DomainError::Generation`, never a successful empty story; an
    /// under-length story is a warning only.
    pub async fn generate(
        &self,
        character: &Character,
        genre: Genre,
    ) -> Result<GeneratedStory, DomainError> {
        let built = match genre {
            Genre::General => prompt::general_prompt(&character.name, &character.details),
            _ => prompt::genre_prompt(&character.name, &character.details, genre),
        };

        tracing::info!("Generating {} story for character: {}", genre, character.name);

        let options = GenerationOptions::new(GENERATION_TEMPERATURE, GENERATION_MAX_TOKENS);
        let text = self.backend.generate(&built, &options).await?;

        self.finish(text, character, "created")
    }

    /// Rewrite an existing story according to feedback.
    ///
    /// Uses backend-default generation parameters; same failure wrapping as
    /// [`generate`](Self::generate).
    pub async fn improve(
        &self,
        character: &Character,
        old_story: &str,
        feedback: &str,
    ) -> Result<GeneratedStory, DomainError> {
        let built =
            prompt::improve_prompt(&character.name, &character.details, old_story, feedback);

        tracing::info!("Improving story for character: {}", character.name);

        let text = self
            .backend
            .generate(&built, &GenerationOptions::default())
            .await?;

        self.finish(text, character, "improved")
    }

    /// The model ID of the configured backend
    pub fn model_id(&self) -> &str {
        self.backend.model_id()
    }

    fn finish(
        &self,
        text: String,
        character: &Character,
        verb: &str,
    ) -> Result<GeneratedStory, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Generation(
                "no story was produced".to_string(),
            ));
        }

        let story = GeneratedStory::new(text, character.name.clone());

        if story.word_count < SHORT_STORY_WORDS {
            tracing::warn!("Story is quite short: {} words", story.word_count);
        }

        tracing::info!(
            "Story {} successfully for {} ({} words)",
            verb,
            character.name,
            story.word_count
        );

        Ok(story)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Stub backend that records the options it was called with
    struct StubBackend {
        response: Result<String, String>,
        seen_options: Mutex<Option<GenerationOptions>>,
    }

    impl StubBackend {
        fn returning(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                seen_options: Mutex::new(None),
            }
        }

        fn failing(cause: &str) -> Self {
            Self {
                response: Err(cause.to_string()),
                seen_options: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl StoryBackend for StubBackend {
        async fn generate(
            &self,
            _prompt: &str,
            options: &GenerationOptions,
        ) -> Result<String, DomainError> {
            *self.seen_options.lock().unwrap() = Some(options.clone());
            self.response
                .clone()
                .map_err(|cause| DomainError::Generation(format!("request failed: {cause}")))
        }

        fn model_id(&self) -> &str {
            "stub-model"
        }
    }

    fn mira() -> Character {
        Character::new(
            "Mira",
            "A lighthouse keeper afraid of the sea she must cross.",
        )
        .unwrap()
    }

    fn story_of_words(n: usize) -> String {
        std::iter::repeat("word").take(n).collect::<Vec<_>>().join(" ")
    }

    #[tokio::test]
    async fn generate_returns_backend_text_with_word_count() {
        let text = story_of_words(400);
        let backend = Arc::new(StubBackend::returning(&text));
        let service = StoryService::new(backend);

        let story = service.generate(&mira(), Genre::General).await.unwrap();
        assert_eq!(story.story, text);
        assert_eq!(story.character_name, "Mira");
        assert_eq!(story.word_count, 400);
    }

    #[tokio::test]
    async fn generate_sets_temperature_and_token_cap() {
        let backend = Arc::new(StubBackend::returning(&story_of_words(400)));
        let service = StoryService::new(backend.clone());

        service.generate(&mira(), Genre::Mystery).await.unwrap();

        let options = backend.seen_options.lock().unwrap().clone().unwrap();
        assert_eq!(options.temperature, Some(0.7));
        assert_eq!(options.max_output_tokens, Some(1500));
    }

    #[tokio::test]
    async fn improve_uses_backend_default_parameters() {
        let backend = Arc::new(StubBackend::returning(&story_of_words(350)));
        let service = StoryService::new(backend.clone());

        service
            .improve(&mira(), "Once upon a tide.", "More dialogue.")
            .await
            .unwrap();

        let options = backend.seen_options.lock().unwrap().clone().unwrap();
        assert_eq!(options.temperature, None);
        assert_eq!(options.max_output_tokens, None);
    }

    #[tokio::test]
    async fn empty_backend_text_is_a_generation_error() {
        let backend = Arc::new(StubBackend::returning("   \n  "));
        let service = StoryService::new(backend);

        let result = service.generate(&mira(), Genre::General).await;
        assert!(matches!(result, Err(DomainError::Generation(_))));
    }

    #[tokio::test]
    async fn backend_failure_is_a_generation_error() {
        let backend = Arc::new(StubBackend::failing("connection reset"));
        let service = StoryService::new(backend);

        let result = service.generate(&mira(), Genre::Adventure).await;
        let Err(DomainError::Generation(cause)) = result else {
            panic!("expected Generation error");
        };
        assert!(cause.contains("connection reset"));
    }

    #[tokio::test]
    async fn short_story_still_succeeds() {
        // 300 is advisory only
        let backend = Arc::new(StubBackend::returning(&story_of_words(120)));
        let service = StoryService::new(backend);

        let story = service.generate(&mira(), Genre::Funny).await.unwrap();
        assert_eq!(story.word_count, 120);
    }

    #[tokio::test]
    async fn improve_empty_output_is_a_generation_error() {
        let backend = Arc::new(StubBackend::returning(""));
        let service = StoryService::new(backend);

        let result = service
            .improve(&mira(), "Once upon a tide.", "More dialogue.")
            .await;
        assert!(matches!(result, Err(DomainError::Generation(_))));
    }
}
