//! AI core - Clients for the generative-language and document-extraction providers
//!
//! Two REST clients live here: a Gemini `generateContent` client used for
//! language isolation, content filtering, and classification prompts, and
//! a Document AI `process` client used for OCR over images and PDFs.
//! Both are thin wire-level clients; routing and validation happen in the
//! application layer.

pub mod config;
pub mod docai;
pub mod error;
pub mod gemini;

pub use config::{DocAiConfig, GeminiConfig};
pub use docai::DocAiClient;
pub use error::AiCoreError;
pub use gemini::GeminiClient;
