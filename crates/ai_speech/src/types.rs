//! Request and response types shared by the speech providers

use serde::{Deserialize, Serialize};

/// Voice selection for a Google synthesis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisVoice {
    /// BCP-47 language code (e.g. "en-US")
    pub language_code: String,
    /// Full voice name (e.g. "en-US-Wavenet-D")
    pub name: String,
    /// SSML gender label ("MALE", "FEMALE", "NEUTRAL")
    pub ssml_gender: String,
}

/// Audio shaping parameters for a Google synthesis request
#[derive(Debug, Clone, PartialEq)]
pub struct AudioOptions {
    /// Speaking rate multiplier
    pub speaking_rate: f32,
    /// Pitch adjustment in semitones
    pub pitch: f32,
    /// Volume gain in decibels
    pub volume_gain_db: f32,
    /// Audio effects profiles to apply
    pub effects_profile_id: Vec<String>,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            speaking_rate: 1.0,
            pitch: 0.0,
            volume_gain_db: 0.0,
            effects_profile_id: Vec::new(),
        }
    }
}

/// A voice as reported by the Google voice listing endpoint
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GoogleVoice {
    /// Full voice name
    pub name: String,
    /// SSML gender label
    #[serde(rename = "ssmlGender", default)]
    pub ssml_gender: String,
    /// Language codes the voice supports
    #[serde(rename = "languageCodes", default)]
    pub language_codes: Vec<String>,
}

/// A style-instructed synthesis request for the OpenAI provider
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StyledSpeechRequest {
    /// Text to speak, with any emphasis markup applied
    pub input: String,
    /// Voice name (e.g. "coral")
    pub voice: String,
    /// Speaking speed multiplier
    pub speed: f32,
    /// Delivery instructions passed through to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}
