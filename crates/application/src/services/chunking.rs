//! Byte-bounded text chunking for the chunked synthesis provider

/// Split text into ordered chunks of at most `max_bytes` bytes each
///
/// Splits fall on UTF-8 character boundaries, so a chunk can come in under
/// the ceiling when a multibyte character straddles it. A character wider
/// than `max_bytes` is emitted as its own over-sized chunk rather than
/// looping forever.
#[must_use]
pub fn chunk_by_bytes(text: &str, max_bytes: usize) -> Vec<&str> {
    assert!(max_bytes > 0, "chunk ceiling must be positive");

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        if rest.len() <= max_bytes {
            chunks.push(rest);
            break;
        }
        let mut end = max_bytes;
        while end > 0 && !rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            end = rest
                .chars()
                .next()
                .map_or(rest.len(), char::len_utf8);
        }
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }
    chunks
}
