//! Chunked synthesis adapter - Implements `ChunkedSynthesisPort` using ai_speech

use ai_speech::{
    AudioOptions, GoogleSpeechConfig, GoogleTtsClient, SpeechError, SynthesisVoice,
};
use application::error::ApplicationError;
use application::ports::{ChunkVoice, ChunkedSynthesisPort, VoiceOption};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for chunked narration using Google Cloud Text-to-Speech
pub struct GoogleSpeechAdapter {
    client: GoogleTtsClient,
}

impl std::fmt::Debug for GoogleSpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSpeechAdapter")
            .field("client", &"GoogleTtsClient")
            .finish()
    }
}

impl GoogleSpeechAdapter {
    /// Create a new adapter from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: GoogleSpeechConfig) -> Result<Self, ApplicationError> {
        let client =
            GoogleTtsClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: GoogleTtsClient) -> Self {
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
impl ChunkedSynthesisPort for GoogleSpeechAdapter {
    #[instrument(skip(self, text, voice), fields(text_bytes = text.len(), voice = %voice.voice_name))]
    async fn synthesize_chunk(
        &self,
        text: &str,
        voice: &ChunkVoice,
    ) -> Result<Vec<u8>, ApplicationError> {
        let selection = SynthesisVoice {
            language_code: voice.language_code.clone(),
            name: voice.voice_name.clone(),
            ssml_gender: voice.gender.clone(),
        };
        let options = AudioOptions {
            speaking_rate: voice.speaking_rate,
            pitch: voice.pitch,
            volume_gain_db: voice.volume_gain_db,
            effects_profile_id: voice.effects_profile_id.clone(),
        };

        let audio = self
            .client
            .synthesize(text, &selection, &options)
            .await
            .map_err(Self::map_error)?;

        debug!(audio_bytes = audio.len(), "Chunk synthesized");
        Ok(audio)
    }

    #[instrument(skip(self))]
    async fn list_voices(&self) -> Result<Vec<VoiceOption>, ApplicationError> {
        let voices = self
            .client
            .list_voices()
            .await
            .map_err(Self::map_error)?;

        // A voice advertises one or more language codes; the catalog keys
        // off the first one.
        let options = voices
            .into_iter()
            .filter_map(|voice| {
                let language_code = voice.language_codes.into_iter().next()?;
                Some(VoiceOption {
                    name: voice.name,
                    gender: voice.ssml_gender,
                    language_code,
                })
            })
            .collect();

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_maps_to_configuration() {
        let err = GoogleSpeechAdapter::map_error(SpeechError::Configuration("no key".into()));
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn synthesis_failure_maps_to_external_service() {
        let err = GoogleSpeechAdapter::map_error(SpeechError::SynthesisFailed("HTTP 500".into()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}
