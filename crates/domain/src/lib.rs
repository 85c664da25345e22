//! Domain layer - Core narration vocabulary and the instruction grammar
//!
//! Pure business logic with no external dependencies on I/O or providers:
//! - Value objects: the closed vocabularies every synthesis request is
//!   validated against (emotions, tones, styles, pause frequencies, gender)
//! - `SpeechDirective`: validated synthesis parameters
//! - The two-grammar instruction parser and the emphasis applier

pub mod directive;
pub mod errors;
pub mod value_objects;

pub use directive::{SpeechDirective, apply_emphasis, parse_instructions};
pub use errors::DomainError;
pub use value_objects::{DetectedGender, Emotion, PauseFrequency, Style, Tone};
