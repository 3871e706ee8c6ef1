//! GeneratedStory - Transient Generation Result
//!
//! Created fresh per generation request and returned to the caller;
//! stories are never persisted.

use serde::{Deserialize, Serialize};

/// A story produced by the generation backend for a character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedStory {
    pub story: String,
    pub character_name: String,
    pub word_count: usize,
}

impl GeneratedStory {
    /// Wrap generated text, computing the whitespace-delimited word count.
    pub fn new(story: String, character_name: String) -> Self {
        let word_count = count_words(&story);
        Self {
            story,
            character_name,
            word_count,
        }
    }
}

/// Number of whitespace-separated tokens in a text
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_matches_whitespace_tokens() {
        let story = GeneratedStory::new(
            "Mira watched the waves  roll\nin.".to_string(),
            "Mira".to_string(),
        );
        assert_eq!(story.word_count, 6);
    }

    #[test]
    fn empty_text_counts_zero_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t  "), 0);
    }

    #[test]
    fn count_is_taken_from_the_stored_text() {
        let text: String = std::iter::repeat("word")
            .take(400)
            .collect::<Vec<_>>()
            .join(" ");
        let story = GeneratedStory::new(text.clone(), "Mira".to_string());
        assert_eq!(story.story, text);
        assert_eq!(story.word_count, 400);
    }
}
