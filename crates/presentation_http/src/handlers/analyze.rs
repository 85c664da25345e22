//! File analysis handler - multipart upload through the extraction pipeline

use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;
use tracing::{debug, instrument};

use application::services::UploadedDocument;

use crate::{error::ApiError, state::AppState};

/// Analysis response body
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Combined, cleaned text across all uploaded files
    pub extracted_text: String,
    /// Dominant emotion label, or the no-detection fallback
    pub detected_emotion: String,
    /// Detected narrator gender ("male", "female", "unknown")
    pub detected_gender: String,
}

/// Handle a batch of uploaded files
///
/// Reads every `files` part of the multipart body, runs the analysis
/// pipeline, and returns the combined text with its classification.
#[instrument(skip(state, multipart))]
pub async fn analyze_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let mut documents = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("files") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Could not read upload: {e}")))?
            .to_vec();

        documents.push(UploadedDocument { file_name, content });
    }

    debug!(files = documents.len(), "Received upload batch");

    let outcome = state.analysis_service.analyze(documents).await?;

    Ok(Json(AnalyzeResponse {
        extracted_text: outcome.extracted_text,
        detected_emotion: outcome.detected_emotion,
        detected_gender: outcome.detected_gender.to_string(),
    }))
}
