//! AI provider errors

use thiserror::Error;

/// Errors that can occur talking to the AI providers
#[derive(Debug, Error)]
pub enum AiCoreError {
    /// Failed to connect to the provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider answered with a success status but no usable content
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// Timeout waiting for the provider
    #[error("Provider timeout after {0}ms")]
    Timeout(u64),

    /// Provider-side error status
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for AiCoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30_000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
