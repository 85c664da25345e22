//! Speech provider implementations

mod google;
mod openai;

pub use google::GoogleTtsClient;
pub use openai::OpenAiTtsClient;
