//! Extraction port - Interface for OCR-style document text extraction

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for extracting raw text from binary documents (images, PDFs)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExtractionPort: Send + Sync {
    /// Extract the full text of a document
    ///
    /// # Arguments
    /// * `content` - Raw document bytes
    /// * `mime_type` - MIME type the provider should interpret the bytes as
    async fn extract_text(
        &self,
        content: &[u8],
        mime_type: &str,
    ) -> Result<String, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_extraction_port_returns_text() {
        let mut mock = MockExtractionPort::new();
        mock.expect_extract_text()
            .returning(|_, _| Ok("scanned text".to_string()));

        let text = mock.extract_text(&[1, 2, 3], "image/png").await.unwrap();
        assert_eq!(text, "scanned text");
    }
}
