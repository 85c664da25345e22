//! Music generation port - Interface for the prompt-based music provider

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for prompt-based music generation
///
/// The provider's JSON response is passed through untouched; the
/// application layer only validates the request.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MusicGenerationPort: Send + Sync {
    /// Generate a track from a prompt, returning the provider's JSON
    async fn generate(
        &self,
        prompt: &str,
        duration: u32,
    ) -> Result<serde_json::Value, ApplicationError>;
}
