//! Application state shared across handlers

use std::sync::Arc;

use application::services::{
    AudioGenerationService, DocumentAnalysisService, MusicGenerationService, VoiceCatalogService,
};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Document analysis pipeline (extraction, isolation, classification)
    pub analysis_service: Arc<DocumentAnalysisService>,
    /// Audio generation service (chunked and styled synthesis)
    pub audio_service: Arc<AudioGenerationService>,
    /// Voice catalog service
    pub voice_service: Arc<VoiceCatalogService>,
    /// Music generation proxy
    pub music_service: Arc<MusicGenerationService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
