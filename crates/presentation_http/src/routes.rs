//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// The upload route gets its own body-size ceiling; the JSON routes share
/// a much smaller one.
pub fn create_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.server.max_body_size_upload_bytes);
    let json_limit = DefaultBodyLimit::max(state.config.server.max_body_size_json_bytes);

    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Content pipeline API
        .route(
            "/api/analyze-files/",
            post(handlers::analyze::analyze_files).layer(upload_limit),
        )
        .route(
            "/api/generate-audio/",
            post(handlers::audio::generate_audio).layer(json_limit.clone()),
        )
        .route(
            "/api/available-voices/",
            get(handlers::voices::available_voices),
        )
        .route(
            "/api/prompt-based-music-generation",
            post(handlers::music::generate_music).layer(json_limit),
        )
        // Attach state
        .with_state(state)
}
