//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - top level: extraction, generation, speech, and music provider settings

mod server;

use std::fmt;

use ai_core::{DocAiConfig, GeminiConfig};
use ai_speech::{GoogleSpeechConfig, OpenAiSpeechConfig};
use integration_music::MusicConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Controls how strictly missing credentials are treated at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - missing credentials only warn
    #[default]
    Development,
    /// Production environment - missing credentials prevent startup
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Speech provider configuration pair
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechAppConfig {
    /// Google Cloud Text-to-Speech settings
    #[serde(default)]
    pub google: GoogleSpeechConfig,

    /// OpenAI style-instructed TTS settings
    #[serde(default)]
    pub openai: OpenAiSpeechConfig,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Option<Environment>,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Document text extraction (OCR) configuration
    #[serde(default)]
    pub extraction: DocAiConfig,

    /// Text generation configuration
    #[serde(default)]
    pub generation: GeminiConfig,

    /// Speech synthesis configuration
    #[serde(default)]
    pub speech: SpeechAppConfig,

    /// Music generation configuration
    #[serde(default)]
    pub music: MusicConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` when a source cannot be read or the
    /// merged tree does not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., AWAAZ_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("AWAAZ")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Check that every provider the server depends on has credentials
    ///
    /// In development, missing credentials only produce warnings; the
    /// affected endpoints fail at call time instead. In production they are
    /// startup errors.
    ///
    /// # Errors
    ///
    /// Returns the list of missing credentials joined into one message.
    pub fn validate(&self) -> Result<(), String> {
        let mut missing = Vec::new();

        if self.extraction.access_token.is_none() {
            missing.push("extraction.access_token");
        }
        if self.extraction.project_id.is_empty() {
            missing.push("extraction.project_id");
        }
        if self.extraction.processor_id.is_empty() {
            missing.push("extraction.processor_id");
        }
        if self.generation.api_key.is_none() {
            missing.push("generation.api_key");
        }
        if self.speech.google.api_key.is_none() {
            missing.push("speech.google.api_key");
        }
        if self.speech.openai.api_key.is_none() {
            missing.push("speech.openai.api_key");
        }
        if self.music.api_key.is_none() {
            missing.push("music.api_key");
        }

        if missing.is_empty() {
            return Ok(());
        }

        let message = format!("Missing credentials: {}", missing.join(", "));
        match self.environment.unwrap_or_default() {
            Environment::Production => Err(message),
            Environment::Development => {
                warn!(%message, "Starting with incomplete provider credentials");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn fully_credentialed() -> AppConfig {
        let mut config = AppConfig::default();
        config.extraction.project_id = "proj".to_string();
        config.extraction.processor_id = "proc".to_string();
        config.extraction.access_token = Some(SecretString::from("t"));
        config.generation.api_key = Some(SecretString::from("g"));
        config.speech.google.api_key = Some(SecretString::from("s"));
        config.speech.openai.api_key = Some(SecretString::from("o"));
        config.music.api_key = Some(SecretString::from("m"));
        config
    }

    #[test]
    fn environment_parses_aliases() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn validate_passes_with_full_credentials() {
        let mut config = fully_credentialed();
        config.environment = Some(Environment::Production);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn production_rejects_missing_credentials() {
        let config = AppConfig {
            environment: Some(Environment::Production),
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("generation.api_key"));
        assert!(err.contains("music.api_key"));
    }

    #[test]
    fn development_tolerates_missing_credentials() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_nested_sections() {
        let json = r#"{
            "environment": "production",
            "server": {"port": 9090},
            "generation": {"model": "gemini-1.5-pro"},
            "speech": {"openai": {"model": "gpt-4o-mini-tts"}}
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.environment, Some(Environment::Production));
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.generation.model, "gemini-1.5-pro");
    }
}
