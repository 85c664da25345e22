//! Application layer - Use cases, port definitions, and pipeline services
//!
//! Orchestrates the content pipeline without knowing about concrete
//! providers: document analysis (extract, isolate, filter, classify),
//! audio generation (two synthesis strategies), the voice catalog, and
//! the music prompt proxy. External collaborators are reached through
//! the ports defined here.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
