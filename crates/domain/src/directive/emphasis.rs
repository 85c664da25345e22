//! Emphasis markup application

/// Wrap each emphasis word in `<emphasis level="strong">` markup
///
/// Words are applied sequentially with plain substring replacement. A word
/// that occurs inside an earlier word's markup gets wrapped again; callers
/// rely on that being stable, so keep the application order as given.
#[must_use]
pub fn apply_emphasis(text: &str, words: &[String]) -> String {
    let mut result = text.to_string();
    for word in words {
        if word.is_empty() {
            continue;
        }
        result = result.replace(
            word.as_str(),
            &format!("<emphasis level=\"strong\">{word}</emphasis>"),
        );
    }
    result
}
