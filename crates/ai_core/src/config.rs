//! Configuration for the AI provider clients

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the Gemini generateContent client
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// Base URL of the Gemini API
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Model to run prompts against
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// API key, sent as a query parameter (sensitive - uses `SecretString`)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Configuration for the Document AI OCR client
#[derive(Debug, Clone, Deserialize)]
pub struct DocAiConfig {
    /// Base URL of the regional Document AI endpoint
    #[serde(default = "default_docai_base_url")]
    pub base_url: String,

    /// Cloud project the processor belongs to
    #[serde(default)]
    pub project_id: String,

    /// Processor location (e.g. "us")
    #[serde(default = "default_location")]
    pub location: String,

    /// Processor identifier
    #[serde(default)]
    pub processor_id: String,

    /// OAuth bearer token (sensitive - uses `SecretString`)
    #[serde(default)]
    pub access_token: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_docai_base_url() -> String {
    "https://us-documentai.googleapis.com".to_string()
}

fn default_location() -> String {
    "us".to_string()
}

impl Default for DocAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_docai_base_url(),
            project_id: String::new(),
            location: default_location(),
            processor_id: String::new(),
            access_token: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}
