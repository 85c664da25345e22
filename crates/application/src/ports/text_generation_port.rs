//! Text generation port - Interface for generative-language calls

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for prompt-driven text generation
///
/// The pipeline uses this for language isolation, content filtering, and
/// the emotion/gender classification calls.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// Run a prompt against a context passage and return the model's text
    async fn generate(&self, prompt: &str, context: &str) -> Result<String, ApplicationError>;
}
