//! Audio generation handler - JSON request in, MP3 attachment out

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use axum::Json;
use tracing::instrument;

use application::services::AudioRequest;

use crate::{error::ApiError, state::AppState};

/// Handle an audio generation request
///
/// On success the body is the raw MP3 track, served as a download.
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn generate_audio(
    State(state): State<AppState>,
    Json(request): Json<AudioRequest>,
) -> Result<Response, ApiError> {
    let artifact = state.audio_service.generate(request).await?;

    let disposition = format!("attachment; filename=\"{}\"", artifact.file_name);
    let response = (
        [
            (header::CONTENT_TYPE, "audio/mp3".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response();

    Ok(response)
}
