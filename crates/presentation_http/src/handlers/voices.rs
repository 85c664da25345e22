//! Voice catalog handler

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use application::ports::VoiceGroup;

use crate::{error::ApiError, state::AppState};

/// Voice listing response body
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceGroup>,
}

/// List the available voices, grouped by language
#[instrument(skip(state))]
pub async fn available_voices(
    State(state): State<AppState>,
) -> Result<Json<VoicesResponse>, ApiError> {
    let voices = state.voice_service.available_voices().await?;
    Ok(Json(VoicesResponse { voices }))
}
