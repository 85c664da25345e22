//! Case-insensitive scanning primitives for the instruction grammars
//!
//! The grammars are fixed phrase templates, so plain marker scans are enough.
//! All matching is ASCII case-insensitive; multibyte characters pass through
//! untouched, which keeps byte offsets valid on the original string.

/// Byte offset of the first ASCII case-insensitive occurrence of `needle`
pub(crate) fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    find_ci(haystack, needle).is_some()
}

/// The remainder of `text` after the first occurrence of `marker`
pub(crate) fn after_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    find_ci(text, marker).map(|idx| &text[idx + marker.len()..])
}

/// Strip `prefix` case-insensitively, or fail
pub(crate) fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Take one word (alphanumerics, underscores, hyphens) after optional whitespace
pub(crate) fn take_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let end = s.find(|c: char| !is_word_char(c)).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some((&s[..end], &s[end..]))
    }
}

/// Take a run of ASCII digits after optional whitespace
pub(crate) fn take_number(s: &str) -> Option<(u32, &str)> {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok().map(|n| (n, &s[end..]))
}

/// The word ending immediately before byte offset `end`, if any
pub(crate) fn word_ending_at(s: &str, end: usize) -> Option<&str> {
    let before = &s[..end];
    let start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map(|(i, _)| i)?;
    Some(&before[start..])
}
