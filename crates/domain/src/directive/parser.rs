//! The instruction parser
//!
//! Two grammars are accepted:
//!
//! - Standard: `Speak in a {emotion} tone with {intensity}% intensity`
//!   followed by optional clauses for a secondary emotion, tone, style,
//!   pacing, pause frequency, and emphasis words.
//! - Legacy: `Speak with a {description} tone [and a slight smile]`, where
//!   the description maps onto a fixed tone/emotion pair and everything
//!   else takes defaults.
//!
//! The standard grammar wins whenever its mandatory emotion clause is
//! present; the legacy grammar is only tried after that fails. A malformed
//! optional clause is treated as absent, not as an error. Captured values
//! are validated in a fixed order so the same input always reports the
//! same first failure.

use super::SpeechDirective;
use super::capture::{
    after_marker, contains_ci, find_ci, strip_prefix_ci, take_number, take_word, word_ending_at,
};
use crate::errors::DomainError;
use crate::value_objects::{Emotion, PauseFrequency, Style, Tone};

const DEFAULT_INTENSITY: u32 = 70;
const DEFAULT_PACING: u32 = 100;
const PACING_MIN: u32 = 50;
const PACING_MAX: u32 = 200;

/// Captured but not yet validated instruction fields
struct RawFields {
    emotion: String,
    intensity: u32,
    secondary: Option<(String, u32)>,
    tone: Option<String>,
    style: Option<String>,
    pacing: Option<u32>,
    pause_frequency: Option<String>,
    emphasis_words: Vec<String>,
}

/// Parse an instruction string into a validated [`SpeechDirective`]
///
/// # Errors
///
/// Returns [`DomainError::MalformedInstruction`] when neither grammar
/// matches, and [`DomainError::InvalidField`] when a captured field is
/// outside its vocabulary or numeric range.
pub fn parse_instructions(instructions: &str) -> Result<SpeechDirective, DomainError> {
    let raw = capture_standard(instructions)
        .or_else(|| capture_legacy(instructions))
        .ok_or_else(|| {
            DomainError::MalformedInstruction(
                "expected 'Speak in a {emotion} tone with {intensity}% intensity...' \
                 or 'Speak with a {tone} tone and a slight smile'"
                    .to_string(),
            )
        })?;
    validate(raw)
}

fn capture_standard(instructions: &str) -> Option<RawFields> {
    let rest = after_marker(instructions, "speak in a ")?;
    let (emotion, rest) = take_word(rest)?;
    let rest = strip_prefix_ci(rest, " tone with ")?;
    let (intensity, rest) = take_number(rest)?;
    strip_prefix_ci(rest, "% intensity")?;

    Some(RawFields {
        emotion: emotion.to_ascii_lowercase(),
        intensity,
        secondary: capture_secondary(instructions),
        tone: capture_tone(instructions),
        style: capture_style(instructions),
        pacing: capture_pacing(instructions),
        pause_frequency: capture_pause_frequency(instructions),
        emphasis_words: capture_emphasis(instructions),
    })
}

fn capture_secondary(instructions: &str) -> Option<(String, u32)> {
    let rest = after_marker(instructions, "blended with ")?;
    let (emotion, rest) = take_word(rest)?;
    let rest = strip_prefix_ci(rest, " at ")?;
    let (intensity, rest) = take_number(rest)?;
    strip_prefix_ci(rest, "% intensity")?;
    Some((emotion.to_ascii_lowercase(), intensity))
}

/// A tone clause is a word sitting between a comma and a literal `tone,`
fn capture_tone(instructions: &str) -> Option<String> {
    let lower = instructions.to_ascii_lowercase();
    let mut offset = 0;
    while let Some(comma) = lower[offset..].find(',') {
        let after = &lower[offset + comma + 1..];
        if let Some(tone) = tone_after_comma(after) {
            return Some(tone);
        }
        offset += comma + 1;
    }
    None
}

fn tone_after_comma(s: &str) -> Option<String> {
    let (word, rest) = take_word(s)?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix("tone")?;
    rest.strip_prefix(',')?;
    Some(word.to_string())
}

/// A style clause is a word immediately before a literal ` style`
fn capture_style(instructions: &str) -> Option<String> {
    let lower = instructions.to_ascii_lowercase();
    let mut offset = 0;
    while let Some(pos) = lower[offset..].find(" style") {
        let abs = offset + pos;
        if let Some(word) = word_ending_at(&lower, abs) {
            return Some(word.to_string());
        }
        offset = abs + 1;
    }
    None
}

fn capture_pacing(instructions: &str) -> Option<u32> {
    let rest = after_marker(instructions, "pacing at ")?;
    let (pacing, rest) = take_number(rest)?;
    strip_prefix_ci(rest, "%")?;
    Some(pacing)
}

fn capture_pause_frequency(instructions: &str) -> Option<String> {
    let rest = after_marker(instructions, "pause frequency set to ")?;
    take_word(rest).map(|(word, _)| word.to_ascii_lowercase())
}

/// The emphasis list runs from the marker to the first period
fn capture_emphasis(instructions: &str) -> Vec<String> {
    let Some(rest) = after_marker(instructions, "emphasize the following words:") else {
        return Vec::new();
    };
    let Some(period) = rest.find('.') else {
        return Vec::new();
    };
    rest[..period]
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

fn capture_legacy(instructions: &str) -> Option<RawFields> {
    let rest = after_marker(instructions, "speak with a ")?;
    let tone_end = find_ci(rest, " tone")?;
    let description = rest[..tone_end].trim().to_ascii_lowercase();
    if description.is_empty() || !description.chars().all(is_description_char) {
        return None;
    }

    let (tone, emotion) = match description.as_str() {
        "calm" => ("calm", "calm"),
        "soothing" => ("soothing", "serene"),
        // "bright", "cheerful", "bright, cheerful", and anything unrecognized
        _ => ("excited", "happiness"),
    };
    let emotion = if contains_ci(instructions, "and a slight smile") {
        "happiness"
    } else {
        emotion
    };

    Some(RawFields {
        emotion: emotion.to_string(),
        intensity: DEFAULT_INTENSITY,
        secondary: None,
        tone: Some(tone.to_string()),
        style: None,
        pacing: None,
        pause_frequency: None,
        emphasis_words: Vec::new(),
    })
}

fn is_description_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ',' || c.is_whitespace()
}

fn validate(raw: RawFields) -> Result<SpeechDirective, DomainError> {
    let primary_emotion = Emotion::from_name(&raw.emotion).ok_or_else(|| {
        DomainError::invalid_field("base emotion", &raw.emotion, Emotion::allowed_names())
    })?;
    let primary_intensity = intensity_in_range("base emotion intensity", raw.intensity)?;

    let (secondary_emotion, secondary_intensity) = match raw.secondary {
        Some((name, intensity)) => {
            let emotion = Emotion::from_name(&name).ok_or_else(|| {
                DomainError::invalid_field("secondary emotion", &name, Emotion::allowed_names())
            })?;
            let intensity = intensity_in_range("secondary emotion intensity", intensity)?;
            (Some(emotion), intensity)
        }
        None => (None, 0),
    };

    let tone = match raw.tone {
        Some(name) => Tone::from_name(&name)
            .ok_or_else(|| DomainError::invalid_field("tone", &name, Tone::allowed_names()))?,
        None => Tone::Empathetic,
    };

    let style = match raw.style {
        Some(name) => Style::from_name(&name)
            .ok_or_else(|| DomainError::invalid_field("style", &name, Style::allowed_names()))?,
        None => Style::Conversational,
    };

    let pacing = raw.pacing.unwrap_or(DEFAULT_PACING);
    if !(PACING_MIN..=PACING_MAX).contains(&pacing) {
        return Err(DomainError::invalid_field(
            "pacing",
            pacing.to_string(),
            format!("{PACING_MIN}-{PACING_MAX}"),
        ));
    }
    let pacing = u16::try_from(pacing)
        .map_err(|_| DomainError::invalid_field("pacing", pacing.to_string(), "50-200"))?;

    let pause_frequency = match raw.pause_frequency {
        Some(name) => PauseFrequency::from_name(&name).ok_or_else(|| {
            DomainError::invalid_field("pause frequency", &name, PauseFrequency::allowed_names())
        })?,
        None => PauseFrequency::Medium,
    };

    Ok(SpeechDirective::new(
        primary_emotion,
        primary_intensity,
        secondary_emotion,
        secondary_intensity,
        tone,
        style,
        pacing,
        pause_frequency,
        raw.emphasis_words,
    ))
}

fn intensity_in_range(field: &'static str, value: u32) -> Result<u8, DomainError> {
    if value > 100 {
        return Err(DomainError::invalid_field(
            field,
            value.to_string(),
            "0-100",
        ));
    }
    u8::try_from(value)
        .map_err(|_| DomainError::invalid_field(field, value.to_string(), "0-100"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_STANDARD: &str = "Speak in a happiness tone with 70% intensity, \
        empathetic tone, conversational style, pacing at 100%, \
        pause frequency set to medium. Emphasize the following words: love, hope.";

    #[test]
    fn parses_full_standard_instruction() {
        let directive = parse_instructions(FULL_STANDARD).unwrap();
        assert_eq!(directive.primary_emotion(), Emotion::Happiness);
        assert_eq!(directive.primary_intensity(), 70);
        assert_eq!(directive.secondary_emotion(), None);
        assert_eq!(directive.secondary_intensity(), 0);
        assert_eq!(directive.tone(), Tone::Empathetic);
        assert_eq!(directive.style(), Style::Conversational);
        assert_eq!(directive.pacing_percent(), 100);
        assert_eq!(directive.pause_frequency(), PauseFrequency::Medium);
        assert_eq!(directive.emphasis_words(), ["love", "hope"]);
    }

    #[test]
    fn parses_secondary_emotion_clause() {
        let directive = parse_instructions(
            "Speak in a sadness tone with 60% intensity blended with calm at 30% intensity",
        )
        .unwrap();
        assert_eq!(directive.primary_emotion(), Emotion::Sadness);
        assert_eq!(directive.secondary_emotion(), Some(Emotion::Calm));
        assert_eq!(directive.secondary_intensity(), 30);
    }

    #[test]
    fn minimal_standard_instruction_takes_defaults() {
        let directive =
            parse_instructions("Speak in a neutral tone with 50% intensity").unwrap();
        assert_eq!(directive.tone(), Tone::Empathetic);
        assert_eq!(directive.style(), Style::Conversational);
        assert_eq!(directive.pacing_percent(), 100);
        assert_eq!(directive.pause_frequency(), PauseFrequency::Medium);
        assert!(directive.emphasis_words().is_empty());
    }

    #[test]
    fn hyphenated_style_is_captured() {
        let directive = parse_instructions(
            "Speak in a fear tone with 80% intensity, bedtime-story style, pacing at 80%",
        )
        .unwrap();
        assert_eq!(directive.style(), Style::BedtimeStory);
        assert_eq!(directive.pacing_percent(), 80);
    }

    #[test]
    fn legacy_grammar_with_smile_maps_to_excited_happiness() {
        let directive =
            parse_instructions("Speak with a bright, cheerful tone and a slight smile").unwrap();
        assert_eq!(directive.primary_emotion(), Emotion::Happiness);
        assert_eq!(directive.primary_intensity(), 70);
        assert_eq!(directive.tone(), Tone::Excited);
        assert_eq!(directive.style(), Style::Conversational);
        assert_eq!(directive.pacing_percent(), 100);
        assert_eq!(directive.pause_frequency(), PauseFrequency::Medium);
        assert!(directive.emphasis_words().is_empty());
    }

    #[test]
    fn legacy_grammar_maps_known_descriptions() {
        let calm = parse_instructions("Speak with a calm tone").unwrap();
        assert_eq!(calm.primary_emotion(), Emotion::Calm);
        assert_eq!(calm.tone(), Tone::Calm);

        let soothing = parse_instructions("Speak with a soothing tone").unwrap();
        assert_eq!(soothing.primary_emotion(), Emotion::Serene);
        assert_eq!(soothing.tone(), Tone::Soothing);
    }

    #[test]
    fn legacy_grammar_defaults_unknown_descriptions() {
        let directive = parse_instructions("Speak with a mellow tone").unwrap();
        assert_eq!(directive.primary_emotion(), Emotion::Happiness);
        assert_eq!(directive.tone(), Tone::Excited);
    }

    #[test]
    fn smile_overrides_mapped_emotion() {
        let directive =
            parse_instructions("Speak with a calm tone and a slight smile").unwrap();
        assert_eq!(directive.primary_emotion(), Emotion::Happiness);
        assert_eq!(directive.tone(), Tone::Calm);
    }

    #[test]
    fn gibberish_is_malformed() {
        let err = parse_instructions("hello world").unwrap_err();
        assert!(matches!(err, DomainError::MalformedInstruction(_)));
    }

    #[test]
    fn empty_instructions_are_malformed() {
        let err = parse_instructions("").unwrap_err();
        assert!(matches!(err, DomainError::MalformedInstruction(_)));
    }

    #[test]
    fn invalid_emotion_is_rejected() {
        let err =
            parse_instructions("Speak in a melancholy tone with 70% intensity").unwrap_err();
        assert!(
            matches!(err, DomainError::InvalidField { field: "base emotion", .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn invalid_secondary_emotion_is_rejected() {
        let err = parse_instructions(
            "Speak in a happiness tone with 70% intensity blended with glee at 20% intensity",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidField { field: "secondary emotion", .. }
        ));
    }

    #[test]
    fn out_of_range_intensity_is_rejected() {
        let err = parse_instructions("Speak in a happiness tone with 150% intensity").unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_field("base emotion intensity", "150", "0-100")
        );
    }

    #[test]
    fn out_of_range_pacing_is_rejected() {
        let err = parse_instructions(
            "Speak in a happiness tone with 70% intensity, pacing at 250%",
        )
        .unwrap_err();
        assert_eq!(err, DomainError::invalid_field("pacing", "250", "50-200"));
    }

    #[test]
    fn invalid_tone_is_rejected() {
        let err = parse_instructions(
            "Speak in a happiness tone with 70% intensity, angry tone, pacing at 100%",
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "tone", .. }));
    }

    #[test]
    fn invalid_pause_frequency_is_rejected() {
        let err = parse_instructions(
            "Speak in a happiness tone with 70% intensity, pause frequency set to often",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidField { field: "pause frequency", .. }
        ));
    }

    #[test]
    fn malformed_optional_clause_is_treated_as_absent() {
        // pacing clause has no percent sign, so it falls back to the default
        let directive =
            parse_instructions("Speak in a happiness tone with 70% intensity, pacing at fast")
                .unwrap();
        assert_eq!(directive.pacing_percent(), 100);
    }

    #[test]
    fn emphasis_list_without_period_is_ignored() {
        let directive = parse_instructions(
            "Speak in a happiness tone with 70% intensity. Emphasize the following words: love, hope",
        )
        .unwrap();
        assert!(directive.emphasis_words().is_empty());
    }

    #[test]
    fn emphasis_list_keeps_non_ascii_words() {
        let directive = parse_instructions(
            "Speak in a love tone with 90% intensity. Emphasize the following words: محبت, امید.",
        )
        .unwrap();
        assert_eq!(directive.emphasis_words(), ["محبت", "امید"]);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        let directive =
            parse_instructions("SPEAK IN A HAPPINESS TONE WITH 70% INTENSITY").unwrap();
        assert_eq!(directive.primary_emotion(), Emotion::Happiness);
    }

    #[test]
    fn validation_reports_emotion_before_pacing() {
        // Both fields are invalid; the emotion error wins
        let err = parse_instructions(
            "Speak in a melancholy tone with 70% intensity, pacing at 500%",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidField { field: "base emotion", .. }
        ));
    }
}
