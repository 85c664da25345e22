//! Speech directives - validated synthesis parameters
//!
//! A [`SpeechDirective`] is the parsed, range-checked form of a narration
//! instruction string. Construction goes through [`parse_instructions`];
//! there is no way to build one with out-of-range values.

mod capture;
mod emphasis;
mod parser;

pub use emphasis::apply_emphasis;
pub use parser::parse_instructions;

use crate::value_objects::{Emotion, PauseFrequency, Style, Tone};
use serde::Serialize;

/// Validated synthesis parameters extracted from an instruction string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechDirective {
    primary_emotion: Emotion,
    primary_intensity: u8,
    secondary_emotion: Option<Emotion>,
    secondary_intensity: u8,
    tone: Tone,
    style: Style,
    pacing_percent: u16,
    pause_frequency: PauseFrequency,
    emphasis_words: Vec<String>,
}

impl SpeechDirective {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        primary_emotion: Emotion,
        primary_intensity: u8,
        secondary_emotion: Option<Emotion>,
        secondary_intensity: u8,
        tone: Tone,
        style: Style,
        pacing_percent: u16,
        pause_frequency: PauseFrequency,
        emphasis_words: Vec<String>,
    ) -> Self {
        Self {
            primary_emotion,
            primary_intensity,
            secondary_emotion,
            secondary_intensity,
            tone,
            style,
            pacing_percent,
            pause_frequency,
            emphasis_words,
        }
    }

    #[must_use]
    pub const fn primary_emotion(&self) -> Emotion {
        self.primary_emotion
    }

    /// Intensity of the primary emotion, 0-100
    #[must_use]
    pub const fn primary_intensity(&self) -> u8 {
        self.primary_intensity
    }

    #[must_use]
    pub const fn secondary_emotion(&self) -> Option<Emotion> {
        self.secondary_emotion
    }

    /// Intensity of the secondary emotion, 0 when no secondary emotion is set
    #[must_use]
    pub const fn secondary_intensity(&self) -> u8 {
        self.secondary_intensity
    }

    #[must_use]
    pub const fn tone(&self) -> Tone {
        self.tone
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Pacing as a percentage of normal speed, 50-200
    #[must_use]
    pub const fn pacing_percent(&self) -> u16 {
        self.pacing_percent
    }

    #[must_use]
    pub const fn pause_frequency(&self) -> PauseFrequency {
        self.pause_frequency
    }

    /// Words to wrap in emphasis markup, in instruction order
    #[must_use]
    pub fn emphasis_words(&self) -> &[String] {
        &self.emphasis_words
    }

    /// Playback speed multiplier derived from pacing, clamped to [0.5, 2.0]
    #[must_use]
    pub fn speed_multiplier(&self) -> f32 {
        (f32::from(self.pacing_percent) / 100.0).clamp(0.5, 2.0)
    }
}
