//! Gemini generateContent client implementation

use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::GeminiConfig;
use crate::error::AiCoreError;

/// Client for the Gemini `generateContent` REST endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Errors
    ///
    /// Returns `AiCoreError::ConnectionFailed` if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, AiCoreError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AiCoreError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized Gemini client"
        );

        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Run a prompt with a leading context block and return the generated text
    ///
    /// The context is sent as the first part of the request, the prompt as
    /// the second, matching how the model expects framing and task to arrive.
    ///
    /// # Errors
    ///
    /// Returns `AiCoreError::ServerError` on non-success status codes,
    /// `AiCoreError::InvalidResponse` when the body cannot be parsed, and
    /// `AiCoreError::EmptyResponse` when no candidate text comes back.
    #[instrument(skip(self, prompt, context), fields(model = %self.config.model, prompt_len = prompt.len()))]
    pub async fn generate_content(
        &self,
        prompt: &str,
        context: &str,
    ) -> Result<String, AiCoreError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: context.to_string(),
                    },
                    Part {
                        text: prompt.to_string(),
                    },
                ],
            }],
        };

        debug!("Sending generateContent request");

        let api_key = self
            .config
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().to_string())
            .unwrap_or_default();

        let response = self
            .client
            .post(self.api_url())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Gemini request failed");
            return Err(AiCoreError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiCoreError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AiCoreError::EmptyResponse);
        }

        debug!(response_len = text.len(), "Gemini request completed");
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}
