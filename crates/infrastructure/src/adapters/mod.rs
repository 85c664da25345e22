//! Adapters implementing the application ports on top of the provider clients

mod docai_extraction_adapter;
mod gemini_text_adapter;
mod google_speech_adapter;
mod loudly_music_adapter;
mod openai_speech_adapter;

pub use docai_extraction_adapter::DocAiExtractionAdapter;
pub use gemini_text_adapter::GeminiTextAdapter;
pub use google_speech_adapter::GoogleSpeechAdapter;
pub use loudly_music_adapter::LoudlyMusicAdapter;
pub use openai_speech_adapter::OpenAiSpeechAdapter;
