//! Document analysis pipeline
//!
//! Per uploaded document: extract raw text (OCR for images and PDFs,
//! direct reads for docx/txt), isolate the Urdu content, then run a
//! content-filter pass. Documents that extract to nothing are skipped,
//! not failed. Cleaned texts are joined in upload order and classified
//! once at the end.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{ExtractionPort, TextGenerationPort};
use crate::services::classification::{Classification, ClassificationService};
use crate::services::docx_reader::extract_docx_text;

/// Hard cap on files per analysis batch
pub const MAX_FILES_PER_BATCH: usize = 5000;

/// Per-file size ceiling imposed by the extraction provider
pub const MAX_FILE_BYTES: usize = 20 * 1024 * 1024;

const URDU_ISOLATION_PROMPT: &str =
    "Extract content in Urdu only, including all diacritic marks such as zair, zabar, pesh, \
     and all other diacritic marks.\n\
     Output only the extracted Urdu content without explanations.";

/// One uploaded file, held in memory for the duration of the request
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Result of analyzing a batch of documents
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub extracted_text: String,
    pub detected_emotion: String,
    pub detected_gender: domain::DetectedGender,
}

/// Service running the extraction pipeline and the classification stage
pub struct DocumentAnalysisService {
    extraction: Arc<dyn ExtractionPort>,
    text_generation: Arc<dyn TextGenerationPort>,
    classification: ClassificationService,
}

impl DocumentAnalysisService {
    pub fn new(
        extraction: Arc<dyn ExtractionPort>,
        text_generation: Arc<dyn TextGenerationPort>,
    ) -> Self {
        let classification = ClassificationService::new(Arc::clone(&text_generation));
        Self {
            extraction,
            text_generation,
            classification,
        }
    }

    /// Analyze a batch of uploaded documents
    ///
    /// # Errors
    ///
    /// Fails fast on an empty batch, an oversized batch, or an oversized
    /// file; fails with [`ApplicationError::NoTextExtracted`] when every
    /// document produced empty text.
    #[instrument(skip(self, documents), fields(file_count = documents.len()))]
    pub async fn analyze(
        &self,
        documents: Vec<UploadedDocument>,
    ) -> Result<AnalysisOutcome, ApplicationError> {
        if documents.is_empty() {
            return Err(ApplicationError::NoFiles);
        }
        if documents.len() > MAX_FILES_PER_BATCH {
            return Err(ApplicationError::BatchTooLarge {
                count: documents.len(),
                max: MAX_FILES_PER_BATCH,
            });
        }

        let mut combined: Vec<String> = Vec::new();
        for document in documents {
            if document.content.len() > MAX_FILE_BYTES {
                return Err(ApplicationError::FileTooLarge {
                    name: document.file_name,
                    max_mb: MAX_FILE_BYTES / (1024 * 1024),
                });
            }

            let raw_text = self.extract(&document).await?;
            if raw_text.is_empty() {
                debug!(file = %document.file_name, "Document extracted to nothing, skipping");
                continue;
            }

            let isolated = self
                .text_generation
                .generate(URDU_ISOLATION_PROMPT, &raw_text)
                .await?;
            if isolated.is_empty() {
                debug!(file = %document.file_name, "No target-language content found, skipping");
                continue;
            }

            let cleaned = self.filter_objectionable(&isolated).await?;
            if !cleaned.is_empty() {
                combined.push(cleaned);
            }
        }

        if combined.is_empty() {
            warn!("Every document in the batch yielded empty text");
            return Err(ApplicationError::NoTextExtracted);
        }

        let extracted_text = combined.join("\n\n");
        let Classification { emotion, gender } =
            self.classification.classify(&extracted_text).await?;

        info!(
            text_len = extracted_text.len(),
            emotion = %emotion,
            gender = %gender,
            "Document analysis complete"
        );
        Ok(AnalysisOutcome {
            extracted_text,
            detected_emotion: emotion,
            detected_gender: gender,
        })
    }

    /// Route a document to the right extractor by file extension
    async fn extract(&self, document: &UploadedDocument) -> Result<String, ApplicationError> {
        let extension = document
            .file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "jpg" | "jpeg" | "png" | "bmp" | "tiff" | "tif" | "gif" | "pdf" => {
                let mime_type = mime_type_for(&extension);
                self.extraction
                    .extract_text(&document.content, mime_type)
                    .await
            }
            "docx" => extract_docx_text(&document.content),
            "txt" => String::from_utf8(document.content.clone()).map_err(|_| {
                ApplicationError::Validation(format!(
                    "File '{}' is not valid UTF-8 text.",
                    document.file_name
                ))
            }),
            other => Err(ApplicationError::UnsupportedFileType(other.to_string())),
        }
    }

    async fn filter_objectionable(&self, text: &str) -> Result<String, ApplicationError> {
        let prompt = format!(
            "Analyze the following text and remove any vulgar, abusive, or unethical words \
             or phrases in Urdu or any other language.\n\
             Return only the cleaned text without any explanations or markers, preserving \
             the original meaning as much as possible.\n\
             If no unethical content is found, return the text as is.\n\
             Text: \"{text}\""
        );
        let cleaned = self.text_generation.generate(&prompt, text).await?;
        Ok(cleaned.trim().to_string())
    }
}

fn mime_type_for(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "bmp" => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        "gif" => "image/gif",
        _ => "application/pdf",
    }
}
