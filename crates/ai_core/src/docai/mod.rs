//! Document AI OCR client

mod client;

pub use client::DocAiClient;
