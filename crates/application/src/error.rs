//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request input is malformed or out of range
    #[error("{0}")]
    Validation(String),

    /// Uploaded file has an extension the pipeline cannot handle
    #[error("Unsupported file type: '{0}'. Supported types are: jpg, jpeg, png, bmp, tiff, tif, gif, pdf, docx, txt.")]
    UnsupportedFileType(String),

    /// An analysis batch arrived with no files
    #[error("No files uploaded.")]
    NoFiles,

    /// Too many files in a single analysis batch
    #[error("Too many files uploaded: {count} exceeds the maximum of {max}.")]
    BatchTooLarge { count: usize, max: usize },

    /// A single uploaded file is over the per-file size ceiling
    #[error("File '{name}' is too large. Maximum file size is {max_mb} MB.")]
    FileTooLarge { name: String, max_mb: usize },

    /// Every document in the batch produced empty text
    #[error("No valid text extracted.")]
    NoTextExtracted,

    /// Synthesis text is over the hard character ceiling
    #[error("Text exceeds the maximum length of {max} characters for audio generation.")]
    TextTooLong { length: usize, max: usize },

    /// Detected narration gender conflicts with the selected voice
    #[error("Gender mismatch: Text is detected as {detected}, but selected voice is {voice}.")]
    GenderMismatch { detected: String, voice: String },

    /// A required voice setting is absent
    #[error("Invalid voice settings: missing required field '{0}'.")]
    MissingField(&'static str),

    /// External provider failed, timed out, or answered with garbage
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Provider credentials are not configured
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }

    /// Whether the error is the caller's fault (maps to a 400-class status)
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Domain(_)
                | Self::Validation(_)
                | Self::UnsupportedFileType(_)
                | Self::NoFiles
                | Self::BatchTooLarge { .. }
                | Self::FileTooLarge { .. }
                | Self::NoTextExtracted
                | Self::TextTooLong { .. }
                | Self::GenderMismatch { .. }
                | Self::MissingField(_)
        )
    }
}
