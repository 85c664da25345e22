//! Classification stage - emotion and gender detection over extracted text

use std::sync::Arc;

use domain::{DetectedGender, Emotion};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::TextGenerationPort;

/// Fallback label when the model answers with nothing usable
const NO_EMOTION_DETECTED: &str = "No clear emotion detected";

/// Emotion and gender detected for a text passage
///
/// The emotion is the model's free-text answer passed through as-is;
/// only the gender is coerced into a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub emotion: String,
    pub gender: DetectedGender,
}

/// Service running the two independent classification calls
pub struct ClassificationService {
    text_generation: Arc<dyn TextGenerationPort>,
}

impl ClassificationService {
    pub fn new(text_generation: Arc<dyn TextGenerationPort>) -> Self {
        Self { text_generation }
    }

    /// Classify the dominant emotion and the subject's gender
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn classify(&self, text: &str) -> Result<Classification, ApplicationError> {
        let emotion = self.detect_emotion(text).await?;
        let gender = self.detect_gender(text).await?;
        debug!(emotion = %emotion, gender = %gender, "Classification complete");
        Ok(Classification { emotion, gender })
    }

    async fn detect_emotion(&self, text: &str) -> Result<String, ApplicationError> {
        let prompt = format!(
            "Analyze the following text and identify the single most prominent emotion \
             from this list: {}.\n\
             The text may be in Urdu, English, or a mix of both or any other language. \
             Provide only the most dominant emotion as a single word or phrase.\n\
             Text: \"{text}\"",
            Emotion::allowed_names()
        );
        let answer = self.text_generation.generate(&prompt, text).await?;
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(NO_EMOTION_DETECTED.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    async fn detect_gender(&self, text: &str) -> Result<DetectedGender, ApplicationError> {
        let prompt = format!(
            "Analyze the following Urdu text and determine the gender of the subject \
             (male, female, or unknown).\n\
             Look for gender-specific indicators such as pronouns (e.g., \"وہ\" with context), \
             verb conjugations (e.g., \"گیا\" for male, \"گئی\" for female), \
             or nouns (e.g., \"لڑکا\" for male, \"لڑکی\" for female). \
             Return only the detected gender as \"male\", \"female\", or \"unknown\".\n\
             Text: \"{text}\""
        );
        let answer = self.text_generation.generate(&prompt, text).await?;
        Ok(DetectedGender::coerce(&answer))
    }
}
