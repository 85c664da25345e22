//! Text generation adapter - Implements `TextGenerationPort` using ai_core

use ai_core::{AiCoreError, GeminiClient, GeminiConfig};
use application::error::ApplicationError;
use application::ports::TextGenerationPort;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for prompt-driven text generation using Gemini
pub struct GeminiTextAdapter {
    client: GeminiClient,
}

impl std::fmt::Debug for GeminiTextAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTextAdapter")
            .field("client", &"GeminiClient")
            .finish()
    }
}

impl GeminiTextAdapter {
    /// Create a new adapter from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: GeminiConfig) -> Result<Self, ApplicationError> {
        let client =
            GeminiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn map_error(err: AiCoreError) -> ApplicationError {
        match err {
            AiCoreError::InvalidResponse(e) => ApplicationError::Internal(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl TextGenerationPort for GeminiTextAdapter {
    #[instrument(skip(self, prompt, context), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str, context: &str) -> Result<String, ApplicationError> {
        match self.client.generate_content(prompt, context).await {
            Ok(text) => {
                debug!(response_len = text.len(), "Generation completed");
                Ok(text)
            }
            // The pipeline treats "nothing useful in this document" as an
            // empty string and skips it, so a contentless answer is not a
            // failure here.
            Err(AiCoreError::EmptyResponse) => Ok(String::new()),
            Err(other) => Err(Self::map_error(other)),
        }
    }
}
