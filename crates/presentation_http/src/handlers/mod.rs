//! HTTP request handlers

pub mod analyze;
pub mod audio;
pub mod health;
pub mod music;
pub mod voices;
