//! Application services - Pipeline use cases

mod audio_generation;
mod chunking;
mod classification;
mod document_analysis;
mod docx_reader;
mod music_generation;
mod voice_catalog;

pub use audio_generation::{
    AUDIO_FILE_NAME, AudioArtifact, AudioGenerationService, AudioRequest, MAX_TEXT_CHARS,
    TtsProvider, VoiceSettings,
};
pub use chunking::chunk_by_bytes;
pub use classification::{Classification, ClassificationService};
pub use document_analysis::{
    AnalysisOutcome, DocumentAnalysisService, MAX_FILE_BYTES, MAX_FILES_PER_BATCH,
    UploadedDocument,
};
pub use docx_reader::extract_docx_text;
pub use music_generation::{
    DEFAULT_DURATION_SECS, MAX_DURATION_SECS, MIN_DURATION_SECS, MIN_PROMPT_CHARS,
    MusicGenerationService,
};
pub use voice_catalog::{STYLED_VOICE_NAMES, VoiceCatalogService, build_catalog};
