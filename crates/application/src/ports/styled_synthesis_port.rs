//! Styled synthesis port - Interface for the single-shot instruction-driven TTS provider

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// One complete styled synthesis request
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSynthesisRequest {
    /// Full narration text, already normalized and emphasis-marked
    pub text: String,
    /// Provider voice name (e.g. "nova", "alloy")
    pub voice_name: String,
    /// Speed multiplier derived from pacing, within [0.5, 2.0]
    pub speed: f32,
    /// The raw instruction string, forwarded for provider-side styling
    pub instructions: Option<String>,
}

/// Port for the synthesis provider that takes the whole text in one call
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StyledSynthesisPort: Send + Sync {
    /// Synthesize the full text into MP3 bytes
    async fn synthesize(
        &self,
        request: StyledSynthesisRequest,
    ) -> Result<Vec<u8>, ApplicationError>;
}
