//! Emotion value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary affect label for narration
///
/// The closed set of emotions the synthesis pipeline understands. Both the
/// instruction parser and the classification stage draw from this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Neutral,
    Sympathetic,
    Sincere,
    Calm,
    Serene,
    Sadness,
    Happiness,
    Fear,
    Horror,
    Surprise,
    Anger,
    Rage,
    Love,
    Excitement,
    Anxiety,
    Disgust,
}

impl Emotion {
    /// Parse an emotion from its lowercase name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Sympathetic => "sympathetic",
            Self::Sincere => "sincere",
            Self::Calm => "calm",
            Self::Serene => "serene",
            Self::Sadness => "sadness",
            Self::Happiness => "happiness",
            Self::Fear => "fear",
            Self::Horror => "horror",
            Self::Surprise => "surprise",
            Self::Anger => "anger",
            Self::Rage => "rage",
            Self::Love => "love",
            Self::Excitement => "excitement",
            Self::Anxiety => "anxiety",
            Self::Disgust => "disgust",
        }
    }

    /// All emotions, in catalog order
    #[must_use]
    pub const fn all() -> [Self; 16] {
        [
            Self::Neutral,
            Self::Sympathetic,
            Self::Sincere,
            Self::Calm,
            Self::Serene,
            Self::Sadness,
            Self::Happiness,
            Self::Fear,
            Self::Horror,
            Self::Surprise,
            Self::Anger,
            Self::Rage,
            Self::Love,
            Self::Excitement,
            Self::Anxiety,
            Self::Disgust,
        ]
    }

    /// Comma-separated list of every emotion name, for prompts and errors
    #[must_use]
    pub fn allowed_names() -> String {
        Self::all()
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
