//! Google Cloud Text-to-Speech provider
//!
//! Speaks the `text:synthesize` and `voices` REST endpoints. Audio always
//! comes back MP3-encoded; the base64 payload is decoded here so callers
//! only ever see raw bytes.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::GoogleSpeechConfig;
use crate::error::SpeechError;
use crate::types::{AudioOptions, GoogleVoice, SynthesisVoice};

/// Google Cloud Text-to-Speech client
#[derive(Debug, Clone)]
pub struct GoogleTtsClient {
    client: Client,
    config: GoogleSpeechConfig,
}

impl GoogleTtsClient {
    /// Create a new Google TTS client
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: GoogleSpeechConfig) -> Result<Self, SpeechError> {
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

    fn synthesize_url(&self) -> String {
        format!("{}/v1/text:synthesize", self.config.base_url)
    }

    fn voices_url(&self) -> String {
        format!("{}/v1/voices", self.config.base_url)
    }

    /// Synthesize one chunk of text into MP3 bytes
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::SynthesisFailed` on non-success status codes
    /// and `SpeechError::InvalidResponse` when the audio payload cannot be
    /// parsed or decoded.
    #[instrument(skip(self, text, voice, options), fields(text_bytes = text.len(), voice = %voice.name))]
    pub async fn synthesize(
        &self,
        text: &str,
        voice: &SynthesisVoice,
        options: &AudioOptions,
    ) -> Result<Vec<u8>, SpeechError> {
        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: &voice.language_code,
                name: &voice.name,
                ssml_gender: &voice.ssml_gender,
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
                speaking_rate: options.speaking_rate,
                pitch: options.pitch,
                volume_gain_db: options.volume_gain_db,
                effects_profile_id: &options.effects_profile_id,
            },
        };

        debug!("Sending synthesize request");

        let response = self
            .client
            .post(self.synthesize_url())
            .query(&[("key", self.api_key())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Synthesize request failed");
            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let audio = STANDARD
            .decode(parsed.audio_content)
            .map_err(|e| SpeechError::InvalidResponse(format!("Bad audio encoding: {e}")))?;

        debug!(audio_bytes = audio.len(), "Synthesize request completed");
        Ok(audio)
    }

    /// List the voices the service currently offers
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::SynthesisFailed` on non-success status codes
    /// and `SpeechError::InvalidResponse` when the body cannot be parsed.
    #[instrument(skip(self))]
    pub async fn list_voices(&self) -> Result<Vec<GoogleVoice>, SpeechError> {
        let response = self
            .client
            .get(self.voices_url())
            .query(&[("key", self.api_key())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Voice listing failed");
            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let parsed: VoicesResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        debug!(voices = parsed.voices.len(), "Voice listing completed");
        Ok(parsed.voices)
    }
}

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct VoiceSelection<'a> {
    #[serde(rename = "languageCode")]
    language_code: &'a str,
    name: &'a str,
    #[serde(rename = "ssmlGender")]
    ssml_gender: &'a str,
}

#[derive(Debug, Serialize)]
struct AudioConfig<'a> {
    #[serde(rename = "audioEncoding")]
    audio_encoding: &'a str,
    #[serde(rename = "speakingRate")]
    speaking_rate: f32,
    pitch: f32,
    #[serde(rename = "volumeGainDb")]
    volume_gain_db: f32,
    #[serde(rename = "effectsProfileId")]
    effects_profile_id: &'a [String],
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent", default)]
    audio_content: String,
}

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    #[serde(default)]
    voices: Vec<GoogleVoice>,
}
