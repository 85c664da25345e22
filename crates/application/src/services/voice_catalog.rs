//! Voice catalog assembly
//!
//! Merges the chunked provider's live voice listing with the static
//! catalogs of the styled provider. Live voices are grouped by language
//! code (ascending) and sorted by gender then name inside each group;
//! the static groups are appended after, never interleaved.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{ChunkedSynthesisPort, VoiceGroup, VoiceOption};

/// Voice names accepted by the styled synthesis provider
pub const STYLED_VOICE_NAMES: [&str; 10] = [
    "alloy", "ash", "ballad", "coral", "echo", "fable", "onyx", "nova", "sage", "shimmer",
];

/// Language codes the styled provider is advertised under
const STYLED_LANGUAGE_CODES: [&str; 2] = ["en-US", "ur-PK"];

/// Service answering the available-voices listing
pub struct VoiceCatalogService {
    chunked: Arc<dyn ChunkedSynthesisPort>,
}

impl VoiceCatalogService {
    pub fn new(chunked: Arc<dyn ChunkedSynthesisPort>) -> Self {
        Self { chunked }
    }

    /// Fetch the live listing and merge it with the static catalogs
    #[instrument(skip(self))]
    pub async fn available_voices(&self) -> Result<Vec<VoiceGroup>, ApplicationError> {
        let live = self.chunked.list_voices().await?;
        debug!(live_voices = live.len(), "Fetched live voice listing");
        Ok(build_catalog(live))
    }
}

/// Group, sort, and append the static styled-provider catalogs
#[must_use]
pub fn build_catalog(live_voices: Vec<VoiceOption>) -> Vec<VoiceGroup> {
    let mut by_language: BTreeMap<String, Vec<VoiceOption>> = BTreeMap::new();
    for voice in live_voices {
        by_language
            .entry(voice.language_code.clone())
            .or_default()
            .push(voice);
    }

    let mut groups: Vec<VoiceGroup> = by_language
        .into_iter()
        .map(|(language_code, mut voices)| {
            voices.sort_by(|a, b| (&a.gender, &a.name).cmp(&(&b.gender, &b.name)));
            VoiceGroup {
                language_code,
                voices,
            }
        })
        .collect();

    groups.extend(styled_voice_groups());
    groups
}

fn styled_voice_groups() -> Vec<VoiceGroup> {
    STYLED_LANGUAGE_CODES
        .iter()
        .map(|language_code| VoiceGroup {
            language_code: (*language_code).to_string(),
            voices: STYLED_VOICE_NAMES
                .iter()
                .map(|name| VoiceOption {
                    name: (*name).to_string(),
                    gender: "NEUTRAL".to_string(),
                    language_code: (*language_code).to_string(),
                })
                .collect(),
        })
        .collect()
}
