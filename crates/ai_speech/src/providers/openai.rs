//! OpenAI speech provider
//!
//! Speaks the `/v1/audio/speech` endpoint with the instruction-capable TTS
//! model. The response body is the MP3 stream itself, no envelope.

use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::OpenAiSpeechConfig;
use crate::error::SpeechError;
use crate::types::StyledSpeechRequest;

/// OpenAI style-instructed TTS client
#[derive(Debug, Clone)]
pub struct OpenAiTtsClient {
    client: Client,
    config: OpenAiSpeechConfig,
}

impl OpenAiTtsClient {
    /// Create a new OpenAI TTS client
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: OpenAiSpeechConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> String {
        self.config
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().to_string())
            .unwrap_or_default()
    }

    fn speech_url(&self) -> String {
        format!("{}/v1/audio/speech", self.config.base_url)
    }

    /// Synthesize the full text in one request and return MP3 bytes
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::SynthesisFailed` on non-success status codes.
    #[instrument(skip(self, request), fields(input_len = request.input.len(), voice = %request.voice))]
    pub async fn synthesize(&self, request: &StyledSpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let body = SpeechRequest {
            model: &self.config.model,
            input: &request.input,
            voice: &request.voice,
            response_format: "mp3",
            speed: request.speed,
            instructions: request.instructions.as_deref(),
        };

        debug!("Sending speech request");

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(self.api_key())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %error_body, "Speech request failed");
            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let audio = response.bytes().await?.to_vec();
        debug!(audio_bytes = audio.len(), "Speech request completed");
        Ok(audio)
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
    speed: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    instructions: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speech_url_is_built_from_base() {
        let config = OpenAiSpeechConfig {
            base_url: "http://localhost:9000".to_string(),
            ..OpenAiSpeechConfig::default()
        };
        let client = OpenAiTtsClient::new(config).unwrap();
        assert_eq!(client.speech_url(), "http://localhost:9000/v1/audio/speech");
    }

    #[test]
    fn instructions_are_omitted_when_absent() {
        let body = SpeechRequest {
            model: "gpt-4o-mini-tts",
            input: "hello",
            voice: "coral",
            response_format: "mp3",
            speed: 1.0,
            instructions: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("instructions").is_none());
        assert_eq!(json["response_format"], "mp3");
    }
}
