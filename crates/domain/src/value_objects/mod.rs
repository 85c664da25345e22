//! Value objects - validated domain primitives

mod emotion;
mod gender;
mod pause_frequency;
mod style;
mod tone;

pub use emotion::Emotion;
pub use gender::DetectedGender;
pub use pause_frequency::PauseFrequency;
pub use style::Style;
pub use tone::Tone;
