//! AI speech - Text-to-Speech provider clients
//!
//! Two synthesis backends live here: the Google Cloud Text-to-Speech REST
//! client used for chunked narration with explicit voice parameters, and the
//! OpenAI speech client used for style-instructed synthesis. Chunking,
//! instruction parsing, and voice validation all happen upstream; these
//! clients only speak the provider wire formats.

pub mod config;
pub mod error;
pub mod providers;
pub mod types;

pub use config::{GoogleSpeechConfig, OpenAiSpeechConfig};
pub use error::SpeechError;
pub use providers::{GoogleTtsClient, OpenAiTtsClient};
pub use types::{AudioOptions, GoogleVoice, StyledSpeechRequest, SynthesisVoice};
