//! Genre - Story Style Selector

use serde::{Deserialize, Serialize};

/// Story genre selecting extra prompt guidance.
///
/// Parsing is infallible by design: any string outside the recognized set
/// (including "general") selects the general guidance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Mystery,
    Adventure,
    Funny,
    Heartwarming,
    #[default]
    General,
}

impl Genre {
    /// Parse a genre name, falling back to `General` for anything
    /// unrecognized.
    pub fn parse(s: &str) -> Self {
        match s {
            "mystery" => Genre::Mystery,
            "adventure" => Genre::Adventure,
            "funny" => Genre::Funny,
            "heartwarming" => Genre::Heartwarming,
            _ => Genre::General,
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Mystery => write!(f, "mystery"),
            Genre::Adventure => write!(f, "adventure"),
            Genre::Funny => write!(f, "funny"),
            Genre::Heartwarming => write!(f, "heartwarming"),
            Genre::General => write!(f, "general"),
        }
    }
}

impl From<&str> for Genre {
    fn from(s: &str) -> Self {
        Genre::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_genres_parse_exactly() {
        assert_eq!(Genre::parse("mystery"), Genre::Mystery);
        assert_eq!(Genre::parse("adventure"), Genre::Adventure);
        assert_eq!(Genre::parse("funny"), Genre::Funny);
        assert_eq!(Genre::parse("heartwarming"), Genre::Heartwarming);
    }

    #[test]
    fn unknown_values_fall_back_to_general() {
        assert_eq!(Genre::parse("general"), Genre::General);
        assert_eq!(Genre::parse("sci-fi"), Genre::General);
        assert_eq!(Genre::parse(""), Genre::General);
        // Matching is exact, not case-insensitive
        assert_eq!(Genre::parse("Mystery"), Genre::General);
    }

    #[test]
    fn display_round_trips() {
        for genre in [
            Genre::Mystery,
            Genre::Adventure,
            Genre::Funny,
            Genre::Heartwarming,
            Genre::General,
        ] {
            assert_eq!(Genre::parse(&genre.to_string()), genre);
        }
    }
}
