//! Music generation handler - thin proxy in front of the music provider

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Music generation request body
#[derive(Debug, Deserialize)]
pub struct MusicRequest {
    /// Free-text description of the desired track
    #[serde(default)]
    pub prompt: String,
    /// Desired track length in seconds
    #[serde(default)]
    pub duration: Option<u32>,
}

/// Handle a prompt-based music generation request
///
/// The provider's JSON response is forwarded untouched.
#[instrument(skip(state, request), fields(prompt_len = request.prompt.len()))]
pub async fn generate_music(
    State(state): State<AppState>,
    Json(request): Json<MusicRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let track = state
        .music_service
        .generate(&request.prompt, request.duration)
        .await?;
    Ok(Json(track))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_tolerates_missing_fields() {
        let request: MusicRequest = serde_json::from_str("{}").unwrap();
        assert!(request.prompt.is_empty());
        assert!(request.duration.is_none());
    }

    #[test]
    fn request_parses_full_body() {
        let request: MusicRequest =
            serde_json::from_str(r#"{"prompt": "calm piano", "duration": 120}"#).unwrap();
        assert_eq!(request.prompt, "calm piano");
        assert_eq!(request.duration, Some(120));
    }
}
