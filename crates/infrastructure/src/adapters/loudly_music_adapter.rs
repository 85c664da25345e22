//! Music adapter - Implements `MusicGenerationPort` using integration_music

use application::error::ApplicationError;
use application::ports::MusicGenerationPort;
use async_trait::async_trait;
use integration_music::{LoudlyClient, MusicConfig, MusicError};
use tracing::{debug, instrument};

/// Adapter for prompt-based music generation using Loudly
pub struct LoudlyMusicAdapter {
    client: LoudlyClient,
}

impl std::fmt::Debug for LoudlyMusicAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoudlyMusicAdapter")
            .field("client", &"LoudlyClient")
            .finish()
    }
}

impl LoudlyMusicAdapter {
    /// Create a new adapter from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: MusicConfig) -> Result<Self, ApplicationError> {
        let client =
            LoudlyClient::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: LoudlyClient) -> Self {
        Self { client }
    }

    fn map_error(err: MusicError) -> ApplicationError {
        match err {
            MusicError::Configuration(e) => ApplicationError::Configuration(e),
            MusicError::ParseError(e) => ApplicationError::Internal(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl MusicGenerationPort for LoudlyMusicAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len(), duration))]
    async fn generate(
        &self,
        prompt: &str,
        duration: u32,
    ) -> Result<serde_json::Value, ApplicationError> {
        let track = self
            .client
            .generate(prompt, duration)
            .await
            .map_err(Self::map_error)?;

        debug!("Music track generated");
        Ok(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_failure_maps_to_external_service() {
        let err = LoudlyMusicAdapter::map_error(MusicError::GenerationFailed("HTTP 400".into()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn configuration_error_maps_to_configuration() {
        let err = LoudlyMusicAdapter::map_error(MusicError::Configuration("no endpoint".into()));
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
