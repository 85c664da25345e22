//! Document AI process client implementation

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::DocAiConfig;
use crate::error::AiCoreError;

/// Client for the Document AI `process` REST endpoint
#[derive(Debug, Clone)]
pub struct DocAiClient {
    client: Client,
    config: DocAiConfig,
}

impl DocAiClient {
    /// Create a new Document AI client
    ///
    /// # Errors
    ///
    /// Returns `AiCoreError::ConnectionFailed` if the HTTP client cannot be built.
    pub fn new(config: DocAiConfig) -> Result<Self, AiCoreError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AiCoreError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            processor = %config.processor_id,
            "Initialized Document AI client"
        );

        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/processors/{}:process",
            self.config.base_url,
            self.config.project_id,
            self.config.location,
            self.config.processor_id
        )
    }

    /// Run OCR over a document and return the recognized text
    ///
    /// The raw bytes are base64-encoded into the request body. A document
    /// the processor finds no text in yields an empty string, not an error.
    ///
    /// # Errors
    ///
    /// Returns `AiCoreError::ServerError` on non-success status codes and
    /// `AiCoreError::InvalidResponse` when the body cannot be parsed.
    #[instrument(skip(self, content), fields(bytes = content.len(), mime_type = %mime_type))]
    pub async fn process(&self, content: &[u8], mime_type: &str) -> Result<String, AiCoreError> {
        let request = ProcessRequest {
            raw_document: RawDocument {
                content: STANDARD.encode(content),
                mime_type: mime_type.to_string(),
            },
        };

        debug!("Sending process request");

        let access_token = self
            .config
            .access_token
            .as_ref()
            .map(|token| token.expose_secret().to_string())
            .unwrap_or_default();

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Document AI request failed");
            return Err(AiCoreError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let parsed: ProcessResponse = response
            .json()
            .await
            .map_err(|e| AiCoreError::InvalidResponse(e.to_string()))?;

        let text = parsed.document.text;
        debug!(text_len = text.len(), "Document AI request completed");
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct ProcessRequest {
    #[serde(rename = "rawDocument")]
    raw_document: RawDocument,
}

#[derive(Debug, Serialize)]
struct RawDocument {
    content: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
}

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    #[serde(default)]
    document: Document,
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_includes_processor_path() {
        let config = DocAiConfig {
            base_url: "http://localhost:9000".to_string(),
            project_id: "proj".to_string(),
            location: "us".to_string(),
            processor_id: "proc-1".to_string(),
            ..DocAiConfig::default()
        };
        let client = DocAiClient::new(config).unwrap();
        assert_eq!(
            client.api_url(),
            "http://localhost:9000/v1/projects/proj/locations/us/processors/proc-1:process"
        );
    }

    #[test]
    fn response_tolerates_missing_text() {
        let parsed: ProcessResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.document.text.is_empty());
    }
}
