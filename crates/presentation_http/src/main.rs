//! Awaaz HTTP Server
//!
//! Main entry point for the content-to-speech API server.

use std::{sync::Arc, time::Duration};

use application::services::{
    AudioGenerationService, DocumentAnalysisService, MusicGenerationService, VoiceCatalogService,
};
use infrastructure::{
    AppConfig, Environment,
    adapters::{
        DocAiExtractionAdapter, GeminiTextAdapter, GoogleSpeechAdapter, LoudlyMusicAdapter,
        OpenAiSpeechAdapter,
    },
};
use presentation_http::{error::set_expose_internal_errors, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can honor it
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "awaaz_server=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(env_filter);
    if config.server.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    info!("Awaaz v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    if config.environment == Some(Environment::Production) {
        set_expose_internal_errors(false);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.generation.model,
        "Configuration loaded"
    );

    // Initialize provider adapters
    let extraction: Arc<dyn application::ports::ExtractionPort> = Arc::new(
        DocAiExtractionAdapter::from_config(config.extraction.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize extraction: {e}"))?,
    );
    let text_generation: Arc<dyn application::ports::TextGenerationPort> = Arc::new(
        GeminiTextAdapter::from_config(config.generation.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize text generation: {e}"))?,
    );
    let chunked_speech: Arc<dyn application::ports::ChunkedSynthesisPort> = Arc::new(
        GoogleSpeechAdapter::from_config(config.speech.google.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize chunked synthesis: {e}"))?,
    );
    let styled_speech: Arc<dyn application::ports::StyledSynthesisPort> = Arc::new(
        OpenAiSpeechAdapter::from_config(config.speech.openai.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize styled synthesis: {e}"))?,
    );
    let music: Arc<dyn application::ports::MusicGenerationPort> = Arc::new(
        LoudlyMusicAdapter::from_config(config.music.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize music provider: {e}"))?,
    );

    // Initialize services
    let analysis_service = DocumentAnalysisService::new(extraction, text_generation);
    let audio_service = AudioGenerationService::new(Arc::clone(&chunked_speech), styled_speech);
    let voice_service = VoiceCatalogService::new(chunked_speech);
    let music_service = MusicGenerationService::new(music);

    let state = AppState {
        analysis_service: Arc::new(analysis_service),
        audio_service: Arc::new(audio_service),
        voice_service: Arc::new(voice_service),
        music_service: Arc::new(music_service),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Add middleware (order matters: first added = outermost)
    let mut app = app.layer(TraceLayer::new_for_http());
    if config.server.cors_enabled {
        app = app.layer(cors_layer(&config.server.allowed_origins));
    }

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Build the CORS layer: allow everything when no origins are configured,
/// otherwise restrict to the listed origins
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
