//! Chunked synthesis port - Interface for the chunk-at-a-time TTS provider

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Voice selection and tuning parameters for one chunked synthesis request
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkVoice {
    /// BCP-47 language code (e.g. "en-US", "ur-PK")
    pub language_code: String,
    /// Provider voice name
    pub voice_name: String,
    /// Requested voice gender label
    pub gender: String,
    /// Speaking rate multiplier, 1.0 is normal speed
    pub speaking_rate: f32,
    /// Pitch adjustment in semitones
    pub pitch: f32,
    /// Volume gain in dB
    pub volume_gain_db: f32,
    /// Device effects profiles to apply
    pub effects_profile_id: Vec<String>,
}

/// A single voice as listed by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceOption {
    pub name: String,
    pub gender: String,
    pub language_code: String,
}

/// Voices grouped under one language code, as served by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceGroup {
    pub language_code: String,
    pub voices: Vec<VoiceOption>,
}

/// Port for the synthesis provider with a small per-request payload ceiling
///
/// Long narrations are split upstream and fed through [`synthesize_chunk`]
/// one piece at a time, in order.
///
/// [`synthesize_chunk`]: ChunkedSynthesisPort::synthesize_chunk
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChunkedSynthesisPort: Send + Sync {
    /// Synthesize a single text chunk into MP3 bytes
    async fn synthesize_chunk(
        &self,
        text: &str,
        voice: &ChunkVoice,
    ) -> Result<Vec<u8>, ApplicationError>;

    /// List every voice the provider currently offers
    async fn list_voices(&self) -> Result<Vec<VoiceOption>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_chunked_port_synthesizes() {
        let mut mock = MockChunkedSynthesisPort::new();
        mock.expect_synthesize_chunk()
            .returning(|_, _| Ok(vec![0xff, 0xfb]));

        let voice = ChunkVoice {
            language_code: "ur-PK".to_string(),
            voice_name: "ur-PK-Wavenet-A".to_string(),
            gender: "female".to_string(),
            speaking_rate: 1.0,
            pitch: 0.0,
            volume_gain_db: 0.0,
            effects_profile_id: vec![],
        };
        let audio = mock.synthesize_chunk("کہانی", &voice).await.unwrap();
        assert_eq!(audio, vec![0xff, 0xfb]);
    }

    #[tokio::test]
    async fn mock_chunked_port_lists_voices() {
        let mut mock = MockChunkedSynthesisPort::new();
        mock.expect_list_voices().returning(|| {
            Ok(vec![VoiceOption {
                name: "en-US-Wavenet-A".to_string(),
                gender: "MALE".to_string(),
                language_code: "en-US".to_string(),
            }])
        });

        let voices = mock.list_voices().await.unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].language_code, "en-US");
    }
}
