//! Speaking style value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speaking persona applied on top of tone and emotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Conversational,
    Professional,
    Dramatic,
    Monotone,
    Narrative,
    Poetic,
    Motivational,
    Whispered,
    Sarcastic,
    Childlike,
    Commanding,
    Meditative,
    SportsCoach,
    BedtimeStory,
    MedievalKnight,
    MadScientist,
    PatientTeacher,
    Auctioneer,
    OldTimey,
    ChillSurfer,
}

impl Style {
    /// Parse a style from its canonical name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Canonical name (kebab-case for multi-word styles)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Conversational => "conversational",
            Self::Professional => "professional",
            Self::Dramatic => "dramatic",
            Self::Monotone => "monotone",
            Self::Narrative => "narrative",
            Self::Poetic => "poetic",
            Self::Motivational => "motivational",
            Self::Whispered => "whispered",
            Self::Sarcastic => "sarcastic",
            Self::Childlike => "childlike",
            Self::Commanding => "commanding",
            Self::Meditative => "meditative",
            Self::SportsCoach => "sports-coach",
            Self::BedtimeStory => "bedtime-story",
            Self::MedievalKnight => "medieval-knight",
            Self::MadScientist => "mad-scientist",
            Self::PatientTeacher => "patient-teacher",
            Self::Auctioneer => "auctioneer",
            Self::OldTimey => "old-timey",
            Self::ChillSurfer => "chill-surfer",
        }
    }

    /// All styles, in catalog order
    #[must_use]
    pub const fn all() -> [Self; 20] {
        [
            Self::Conversational,
            Self::Professional,
            Self::Dramatic,
            Self::Monotone,
            Self::Narrative,
            Self::Poetic,
            Self::Motivational,
            Self::Whispered,
            Self::Sarcastic,
            Self::Childlike,
            Self::Commanding,
            Self::Meditative,
            Self::SportsCoach,
            Self::BedtimeStory,
            Self::MedievalKnight,
            Self::MadScientist,
            Self::PatientTeacher,
            Self::Auctioneer,
            Self::OldTimey,
            Self::ChillSurfer,
        ]
    }

    /// Comma-separated list of every style name
    #[must_use]
    pub fn allowed_names() -> String {
        Self::all()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
