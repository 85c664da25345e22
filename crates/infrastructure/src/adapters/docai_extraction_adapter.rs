//! Extraction adapter - Implements `ExtractionPort` using ai_core

use ai_core::{AiCoreError, DocAiClient, DocAiConfig};
use application::error::ApplicationError;
use application::ports::ExtractionPort;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for document text extraction using Document AI
pub struct DocAiExtractionAdapter {
    client: DocAiClient,
}

impl std::fmt::Debug for DocAiExtractionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocAiExtractionAdapter")
            .field("client", &"DocAiClient")
            .finish()
    }
}

impl DocAiExtractionAdapter {
    /// Create a new adapter from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: DocAiConfig) -> Result<Self, ApplicationError> {
        let client =
            DocAiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: DocAiClient) -> Self {
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
impl ExtractionPort for DocAiExtractionAdapter {
    #[instrument(skip(self, content), fields(bytes = content.len(), mime_type = %mime_type))]
    async fn extract_text(
        &self,
        content: &[u8],
        mime_type: &str,
    ) -> Result<String, ApplicationError> {
        let text = self
            .client
            .process(content, mime_type)
            .await
            .map_err(Self::map_error)?;

        debug!(text_len = text.len(), "Extraction completed");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_external_service() {
        let err = DocAiExtractionAdapter::map_error(AiCoreError::Timeout(30_000));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn invalid_response_maps_to_internal() {
        let err =
            DocAiExtractionAdapter::map_error(AiCoreError::InvalidResponse("bad json".into()));
        assert!(matches!(err, ApplicationError::Internal(_)));
    }
}
