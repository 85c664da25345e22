//! Infrastructure - Adapters and configuration wiring
//!
//! Implements the application-layer ports on top of the provider clients
//! and owns the layered configuration the server boots from.

pub mod adapters;
pub mod config;

pub use config::{AppConfig, Environment, ServerConfig, SpeechAppConfig};
