//! Music prompt proxy - request validation in front of the music provider

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::ApplicationError;
use crate::ports::MusicGenerationPort;

/// Shortest prompt the provider produces anything sensible for
pub const MIN_PROMPT_CHARS: usize = 5;

/// Track duration bounds, in seconds
pub const MIN_DURATION_SECS: u32 = 30;
pub const MAX_DURATION_SECS: u32 = 420;

/// Duration used when the client does not ask for one
pub const DEFAULT_DURATION_SECS: u32 = 60;

/// Service validating music prompts before they reach the provider
pub struct MusicGenerationService {
    port: Arc<dyn MusicGenerationPort>,
}

impl MusicGenerationService {
    pub fn new(port: Arc<dyn MusicGenerationPort>) -> Self {
        Self { port }
    }

    /// Validate and forward a music generation request
    ///
    /// The provider's JSON response is passed through untouched.
    ///
    /// # Errors
    ///
    /// Validation failures short-circuit before any network call.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len(), duration = ?duration))]
    pub async fn generate(
        &self,
        prompt: &str,
        duration: Option<u32>,
    ) -> Result<serde_json::Value, ApplicationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ApplicationError::Validation(
                "Prompt is required.".to_string(),
            ));
        }
        if prompt.chars().count() < MIN_PROMPT_CHARS {
            return Err(ApplicationError::Validation(format!(
                "Prompt is too short. Minimum length is {MIN_PROMPT_CHARS} characters."
            )));
        }
        let duration = duration.unwrap_or(DEFAULT_DURATION_SECS);
        if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&duration) {
            return Err(ApplicationError::Validation(format!(
                "Duration must be between {MIN_DURATION_SECS} and {MAX_DURATION_SECS} seconds."
            )));
        }

        let response = self.port.generate(prompt, duration).await?;
        info!(duration, "Music generation succeeded");
        Ok(response)
    }
}
