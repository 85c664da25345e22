//! Configuration for the speech providers

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the Google Cloud Text-to-Speech client
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleSpeechConfig {
    /// Base URL of the Text-to-Speech API
    #[serde(default = "default_google_base_url")]
    pub base_url: String,

    /// API key, sent as a query parameter (sensitive - uses `SecretString`)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_google_base_url() -> String {
    "https://texttospeech.googleapis.com".to_string()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for GoogleSpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_google_base_url(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Configuration for the OpenAI speech client
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSpeechConfig {
    /// Base URL of the OpenAI API
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// API key, sent as a bearer token (sensitive - uses `SecretString`)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Text-to-speech model
    #[serde(default = "default_tts_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_tts_model() -> String {
    "gpt-4o-mini-tts".to_string()
}

impl Default for OpenAiSpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_base_url(),
            api_key: None,
            model: default_tts_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
