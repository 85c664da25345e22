//! Styled synthesis adapter - Implements `StyledSynthesisPort` using ai_speech

use ai_speech::{OpenAiSpeechConfig, OpenAiTtsClient, SpeechError, StyledSpeechRequest};
use application::error::ApplicationError;
use application::ports::{StyledSynthesisPort, StyledSynthesisRequest};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for style-instructed synthesis using the OpenAI TTS model
pub struct OpenAiSpeechAdapter {
    client: OpenAiTtsClient,
}

impl std::fmt::Debug for OpenAiSpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSpeechAdapter")
            .field("client", &"OpenAiTtsClient")
            .finish()
    }
}

impl OpenAiSpeechAdapter {
    /// Create a new adapter from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: OpenAiSpeechConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenAiTtsClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: OpenAiTtsClient) -> Self {
        Self { client }
    }

    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::InvalidResponse(e) => ApplicationError::Internal(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl StyledSynthesisPort for OpenAiSpeechAdapter {
    #[instrument(skip(self, request), fields(text_len = request.text.len(), voice = %request.voice_name))]
    async fn synthesize(
        &self,
        request: StyledSynthesisRequest,
    ) -> Result<Vec<u8>, ApplicationError> {
        let audio = self
            .client
            .synthesize(&StyledSpeechRequest {
                input: request.text,
                voice: request.voice_name,
                speed: request.speed,
                instructions: request.instructions,
            })
            .await
            .map_err(Self::map_error)?;

        debug!(audio_bytes = audio.len(), "Styled synthesis completed");
        Ok(audio)
    }
}
