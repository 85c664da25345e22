//! Detected speaker gender value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender detected for a text passage by the classification stage
///
/// Classifier output is coerced rather than validated: any label other than
/// "male" or "female" collapses to [`DetectedGender::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedGender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl DetectedGender {
    /// Coerce a free-form classifier label into a gender
    ///
    /// Never fails; unrecognized labels become [`DetectedGender::Unknown`].
    #[must_use]
    pub fn coerce(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("male") {
            Self::Male
        } else if label.eq_ignore_ascii_case("female") {
            Self::Female
        } else {
            Self::Unknown
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a requested voice gender conflicts with the detected one
    ///
    /// [`DetectedGender::Unknown`] never conflicts. Comparison against the
    /// requested label is ASCII case-insensitive.
    #[must_use]
    pub fn conflicts_with(&self, requested: &str) -> bool {
        *self != Self::Unknown && !self.as_str().eq_ignore_ascii_case(requested.trim())
    }
}

impl fmt::Display for DetectedGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
