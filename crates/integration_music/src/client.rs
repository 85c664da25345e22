//! Loudly AI music client
//!
//! HTTP client for the Loudly prompt-based song endpoint.

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Music client errors
#[derive(Debug, Error)]
pub enum MusicError {
    /// Connection to the music service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Every payload and endpoint combination was rejected
    #[error("Music generation failed: {0}")]
    GenerationFailed(String),

    /// Failed to parse response from the music service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Music service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MusicConfig {
    /// Candidate song endpoints, tried in order
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,

    /// API key, sent in the `API-KEY` header (sensitive - uses `SecretString`)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoints() -> Vec<String> {
    vec!["https://soundtracks-dev.loudly.com/api/ai/prompt/songs".to_string()]
}

const fn default_timeout() -> u64 {
    10
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Loudly HTTP client implementation
#[derive(Debug)]
pub struct LoudlyClient {
    client: Client,
    config: MusicConfig,
}

impl LoudlyClient {
    /// Create a new Loudly client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `MusicError::Configuration` when no endpoint is configured
    /// or the HTTP client cannot be built.
    pub fn new(config: MusicConfig) -> Result<Self, MusicError> {
        if config.endpoints.is_empty() {
            return Err(MusicError::Configuration(
                "At least one music endpoint is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MusicError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> String {
        self.config
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().to_string())
            .unwrap_or_default()
    }

    /// Generate a track from a text prompt
    ///
    /// Walks each endpoint with three JSON payload variants, then falls
    /// back to a form-encoded request against the primary endpoint. A 400
    /// moves to the next payload variant; any other failure status abandons
    /// the endpoint. The first response carrying a `music_file_path` wins
    /// and is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns `MusicError::GenerationFailed` when every attempt was
    /// rejected, with the last provider message attached.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len(), duration))]
    pub async fn generate(
        &self,
        prompt: &str,
        duration: u32,
    ) -> Result<serde_json::Value, MusicError> {
        let payloads = [
            json!({"prompt": prompt, "duration": duration}),
            json!({"prompt": prompt, "duration": duration, "test": true}),
            json!({"prompt": prompt, "length": duration}),
        ];

        let mut last_rejection = String::new();

        'endpoints: for endpoint in &self.config.endpoints {
            for payload in &payloads {
                debug!(endpoint = %endpoint, "Trying JSON payload");
                let sent = self
                    .client
                    .post(endpoint)
                    .header("API-KEY", self.api_key())
                    .json(payload)
                    .send()
                    .await;

                let response = match sent {
                    Ok(response) => response,
                    Err(e) => {
                        warn!(endpoint = %endpoint, error = %e, "Music request failed to send");
                        last_rejection = e.to_string();
                        continue;
                    }
                };

                let status = response.status();
                let body = response.text().await.unwrap_or_default();

                if status.is_success() {
                    if let Some(track) = parse_track(&body) {
                        debug!(endpoint = %endpoint, "Music generation succeeded");
                        return Ok(track);
                    }
                    warn!(endpoint = %endpoint, "Success status without a track in the body");
                    last_rejection = body;
                    continue;
                }

                last_rejection = format!("HTTP {status}: {body}");
                if status == reqwest::StatusCode::BAD_REQUEST {
                    // Likely a payload shape mismatch, the next variant may fit
                    continue;
                }
                warn!(endpoint = %endpoint, status = %status, "Endpoint rejected the request");
                continue 'endpoints;
            }
        }

        // Older deployments only accept form encoding
        let primary = &self.config.endpoints[0];
        debug!(endpoint = %primary, "Trying form-encoded fallback");
        let sent = self
            .client
            .post(primary)
            .header("API-KEY", self.api_key())
            .form(&[
                ("prompt", prompt.to_string()),
                ("duration", duration.to_string()),
            ])
            .send()
            .await;

        match sent {
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                if status.is_success() {
                    if let Some(track) = parse_track(&body) {
                        debug!(endpoint = %primary, "Form-encoded fallback succeeded");
                        return Ok(track);
                    }
                }
                last_rejection = format!("HTTP {status}: {body}");
            }
            Err(e) => last_rejection = e.to_string(),
        }

        Err(MusicError::GenerationFailed(last_rejection))
    }

    /// Check whether the primary endpoint answers at all
    pub async fn is_healthy(&self) -> bool {
        self.client
            .get(&self.config.endpoints[0])
            .header("API-KEY", self.api_key())
            .send()
            .await
            .is_ok()
    }
}

/// A usable track response carries a `music_file_path` field
fn parse_track(body: &str) -> Option<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("music_file_path").is_some().then_some(value)
}
