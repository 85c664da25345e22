//! Ports - Interfaces to external collaborators

mod chunked_synthesis_port;
mod extraction_port;
mod music_port;
mod styled_synthesis_port;
mod text_generation_port;

pub use chunked_synthesis_port::{ChunkVoice, ChunkedSynthesisPort, VoiceGroup, VoiceOption};
pub use extraction_port::ExtractionPort;
pub use music_port::MusicGenerationPort;
pub use styled_synthesis_port::{StyledSynthesisPort, StyledSynthesisRequest};
pub use text_generation_port::TextGenerationPort;

#[cfg(test)]
pub use chunked_synthesis_port::MockChunkedSynthesisPort;
#[cfg(test)]
pub use extraction_port::MockExtractionPort;
#[cfg(test)]
pub use music_port::MockMusicGenerationPort;
#[cfg(test)]
pub use styled_synthesis_port::MockStyledSynthesisPort;
#[cfg(test)]
pub use text_generation_port::MockTextGenerationPort;
