//! Audio generation dispatcher
//!
//! Routes a synthesis request to one of two mutually exclusive strategies:
//! the chunked provider (split text into byte-bounded chunks, synthesize
//! sequentially, concatenate in order) or the styled provider (parse the
//! instruction string, apply emphasis, one single-shot call).

use std::sync::Arc;

use domain::{DetectedGender, apply_emphasis, parse_instructions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{ChunkVoice, ChunkedSynthesisPort, StyledSynthesisPort, StyledSynthesisRequest};
use crate::services::chunking::chunk_by_bytes;
use crate::services::voice_catalog::STYLED_VOICE_NAMES;

/// Hard ceiling on narration text length, in characters
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Per-chunk payload ceiling of the chunked provider, in bytes
const CHUNK_BYTE_LIMIT: usize = 5_000;

/// File name attached to every generated audio artifact
pub const AUDIO_FILE_NAME: &str = "generated_audio.mp3";

/// Which synthesis backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsProvider {
    #[default]
    Google,
    Gpt4oMini,
}

/// Voice tuning parameters as sent by the client; everything optional,
/// each strategy validates the fields it needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceSettings {
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub voice_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub speaking_rate: Option<f32>,
    #[serde(default)]
    pub pitch: Option<f32>,
    #[serde(default)]
    pub volume_gain_db: Option<f32>,
    #[serde(default)]
    pub audio_effects: Option<Vec<String>>,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// One audio generation request
#[derive(Debug, Clone, Deserialize)]
pub struct AudioRequest {
    pub text: String,
    pub voice_settings_list: Vec<VoiceSettings>,
    #[serde(default)]
    pub detected_gender: Option<String>,
    #[serde(default)]
    pub tts_provider: Option<TtsProvider>,
}

/// Finished audio, ready to stream back as an attachment
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// Service dispatching between the two synthesis strategies
pub struct AudioGenerationService {
    chunked: Arc<dyn ChunkedSynthesisPort>,
    styled: Arc<dyn StyledSynthesisPort>,
}

impl AudioGenerationService {
    pub fn new(
        chunked: Arc<dyn ChunkedSynthesisPort>,
        styled: Arc<dyn StyledSynthesisPort>,
    ) -> Self {
        Self { chunked, styled }
    }

    /// Generate an audio artifact for the request
    ///
    /// # Errors
    ///
    /// Validation failures (empty text, over-length text, missing voice
    /// settings, gender mismatch, malformed instructions) short-circuit
    /// before any provider call.
    #[instrument(skip(self, request), fields(
        provider = ?request.tts_provider,
        text_len = request.text.len()
    ))]
    pub async fn generate(
        &self,
        request: AudioRequest,
    ) -> Result<AudioArtifact, ApplicationError> {
        if request.text.is_empty() {
            return Err(ApplicationError::Validation("No text provided.".to_string()));
        }
        let Some(settings) = request.voice_settings_list.into_iter().next() else {
            return Err(ApplicationError::Validation(
                "Invalid voice settings.".to_string(),
            ));
        };
        let char_count = request.text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(ApplicationError::TextTooLong {
                length: char_count,
                max: MAX_TEXT_CHARS,
            });
        }

        let bytes = match request.tts_provider.unwrap_or_default() {
            TtsProvider::Gpt4oMini => self.generate_styled(&request.text, settings).await?,
            TtsProvider::Google => {
                let detected = DetectedGender::coerce(
                    request.detected_gender.as_deref().unwrap_or("unknown"),
                );
                self.generate_chunked(&request.text, settings, detected)
                    .await?
            }
        };

        info!(audio_bytes = bytes.len(), "Audio generation complete");
        Ok(AudioArtifact {
            bytes,
            file_name: AUDIO_FILE_NAME.to_string(),
        })
    }

    /// Single-shot styled synthesis driven by the instruction string
    async fn generate_styled(
        &self,
        text: &str,
        settings: VoiceSettings,
    ) -> Result<Vec<u8>, ApplicationError> {
        let voice_name = settings
            .voice_name
            .ok_or(ApplicationError::MissingField("voice_name"))?;
        if !STYLED_VOICE_NAMES.contains(&voice_name.as_str()) {
            return Err(ApplicationError::Validation(format!(
                "Invalid voice: {voice_name}. Supported voices: {}.",
                STYLED_VOICE_NAMES.join(", ")
            )));
        }
        let instructions = settings
            .instructions
            .filter(|i| !i.trim().is_empty())
            .ok_or_else(|| {
                ApplicationError::Validation(
                    "Instructions are required for styled synthesis.".to_string(),
                )
            })?;

        let directive = parse_instructions(&instructions)?;
        let text = apply_emphasis(text, directive.emphasis_words());
        // space after each period helps the provider place natural pauses
        let text = text.replace('.', ". ");

        debug!(
            voice = %voice_name,
            speed = directive.speed_multiplier(),
            emphasis_words = directive.emphasis_words().len(),
            "Dispatching styled synthesis"
        );
        self.styled
            .synthesize(StyledSynthesisRequest {
                text,
                voice_name,
                speed: directive.speed_multiplier(),
                instructions: Some(instructions),
            })
            .await
    }

    /// Chunked synthesis: byte-bounded chunks, synthesized sequentially,
    /// spooled to a request-scoped temp directory, concatenated in order
    async fn generate_chunked(
        &self,
        text: &str,
        settings: VoiceSettings,
        detected: DetectedGender,
    ) -> Result<Vec<u8>, ApplicationError> {
        let language_code = settings
            .language_code
            .ok_or(ApplicationError::MissingField("language_code"))?;
        let voice_name = settings
            .voice_name
            .ok_or(ApplicationError::MissingField("voice_name"))?;
        let gender = settings
            .gender
            .ok_or(ApplicationError::MissingField("gender"))?;

        if detected.conflicts_with(&gender) {
            return Err(ApplicationError::GenderMismatch {
                detected: detected.to_string(),
                voice: gender.to_ascii_lowercase(),
            });
        }

        let voice = ChunkVoice {
            language_code,
            voice_name,
            gender,
            speaking_rate: settings.speaking_rate.unwrap_or(1.0),
            pitch: settings.pitch.unwrap_or(0.0),
            volume_gain_db: settings.volume_gain_db.unwrap_or(0.0),
            effects_profile_id: settings.audio_effects.unwrap_or_default(),
        };

        let normalized = text.replace('\n', " ");
        let normalized = normalized.trim();
        let chunks = chunk_by_bytes(normalized, CHUNK_BYTE_LIMIT);
        debug!(chunk_count = chunks.len(), "Dispatching chunked synthesis");

        // Spool each chunk to disk so a failure partway through drops the
        // whole directory with it
        let spool = tempfile::tempdir()
            .map_err(|e| ApplicationError::Internal(format!("chunk spool: {e}")))?;
        let mut chunk_paths = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            let audio = self.chunked.synthesize_chunk(chunk, &voice).await?;
            let path = spool.path().join(format!("chunk_{index:04}.mp3"));
            tokio::fs::write(&path, &audio)
                .await
                .map_err(|e| ApplicationError::Internal(format!("chunk spool: {e}")))?;
            chunk_paths.push(path);
        }

        // MP3 frames are self-contained, so in-order byte concatenation
        // yields one continuous track
        let mut combined = Vec::new();
        for path in &chunk_paths {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|e| ApplicationError::Internal(format!("chunk spool: {e}")))?;
            combined.extend_from_slice(&bytes);
        }
        Ok(combined)
    }
}
