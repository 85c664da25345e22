//! Tone value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery manner for narration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Empathetic,
    SolutionFocused,
    Gentle,
    Authoritative,
    Warm,
    Soothing,
    Excited,
    Noble,
    Chaotic,
    Calm,
}

impl Tone {
    /// Parse a tone from its canonical name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Canonical name (kebab-case for multi-word tones)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empathetic => "empathetic",
            Self::SolutionFocused => "solution-focused",
            Self::Gentle => "gentle",
            Self::Authoritative => "authoritative",
            Self::Warm => "warm",
            Self::Soothing => "soothing",
            Self::Excited => "excited",
            Self::Noble => "noble",
            Self::Chaotic => "chaotic",
            Self::Calm => "calm",
        }
    }

    /// All tones, in catalog order
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Empathetic,
            Self::SolutionFocused,
            Self::Gentle,
            Self::Authoritative,
            Self::Warm,
            Self::Soothing,
            Self::Excited,
            Self::Noble,
            Self::Chaotic,
            Self::Calm,
        ]
    }

    /// Comma-separated list of every tone name
    #[must_use]
    pub fn allowed_names() -> String {
        Self::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
