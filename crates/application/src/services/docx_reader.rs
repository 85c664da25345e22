//! Word document text extraction
//!
//! A .docx file is a zip archive; the narration text lives in
//! `word/document.xml` as `<w:t>` runs grouped into `<w:p>` paragraphs.
//! Only the stored (0) and deflate (8) compression methods appear in
//! real-world documents, so that is all the archive walk supports.

use std::io::Read;

use flate2::read::DeflateDecoder;
use quick_xml::{Reader, events::Event};

use crate::error::ApplicationError;

const EOCD_SIGNATURE: u32 = 0x0605_4b50;
const CENTRAL_SIGNATURE: u32 = 0x0201_4b50;
const LOCAL_SIGNATURE: u32 = 0x0403_4b50;
const DOCUMENT_ENTRY: &str = "word/document.xml";

/// Maximum bytes the end-of-central-directory record can sit from the end
/// (22-byte record plus a 65535-byte comment)
const EOCD_SEARCH_WINDOW: usize = 22 + 0xFFFF;

/// Extract paragraph text from raw .docx bytes
///
/// Paragraphs with only whitespace are dropped; the rest are joined with
/// newlines, matching how the document reads to a human.
///
/// # Errors
///
/// Returns [`ApplicationError::Validation`] when the bytes are not a
/// readable .docx archive.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ApplicationError> {
    let xml = read_zip_entry(bytes, DOCUMENT_ENTRY)?;
    let xml = String::from_utf8(xml).map_err(|_| malformed("document body is not UTF-8"))?;
    paragraphs_from_xml(&xml)
}

fn malformed(detail: &str) -> ApplicationError {
    ApplicationError::Validation(format!("Could not read docx file: {detail}."))
}

fn read_zip_entry(bytes: &[u8], entry_name: &str) -> Result<Vec<u8>, ApplicationError> {
    let eocd = find_eocd(bytes).ok_or_else(|| malformed("missing archive directory"))?;
    let entry_count = read_u16(bytes, eocd + 10).ok_or_else(|| malformed("truncated archive"))?;
    let central_offset =
        read_u32(bytes, eocd + 16).ok_or_else(|| malformed("truncated archive"))? as usize;

    let mut offset = central_offset;
    for _ in 0..entry_count {
        if read_u32(bytes, offset) != Some(CENTRAL_SIGNATURE) {
            return Err(malformed("corrupt central directory"));
        }
        let method = read_u16(bytes, offset + 10).ok_or_else(|| malformed("truncated entry"))?;
        let compressed_size =
            read_u32(bytes, offset + 20).ok_or_else(|| malformed("truncated entry"))? as usize;
        let name_len =
            read_u16(bytes, offset + 28).ok_or_else(|| malformed("truncated entry"))? as usize;
        let extra_len =
            read_u16(bytes, offset + 30).ok_or_else(|| malformed("truncated entry"))? as usize;
        let comment_len =
            read_u16(bytes, offset + 32).ok_or_else(|| malformed("truncated entry"))? as usize;
        let local_offset =
            read_u32(bytes, offset + 42).ok_or_else(|| malformed("truncated entry"))? as usize;
        let name = bytes
            .get(offset + 46..offset + 46 + name_len)
            .ok_or_else(|| malformed("truncated entry name"))?;

        if name == entry_name.as_bytes() {
            return read_local_entry(bytes, local_offset, method, compressed_size);
        }
        offset += 46 + name_len + extra_len + comment_len;
    }
    Err(malformed("no document body in archive"))
}

fn read_local_entry(
    bytes: &[u8],
    offset: usize,
    method: u16,
    compressed_size: usize,
) -> Result<Vec<u8>, ApplicationError> {
    if read_u32(bytes, offset) != Some(LOCAL_SIGNATURE) {
        return Err(malformed("corrupt local header"));
    }
    let name_len =
        read_u16(bytes, offset + 26).ok_or_else(|| malformed("truncated local header"))? as usize;
    let extra_len =
        read_u16(bytes, offset + 28).ok_or_else(|| malformed("truncated local header"))? as usize;
    let data_start = offset + 30 + name_len + extra_len;
    let data = bytes
        .get(data_start..data_start + compressed_size)
        .ok_or_else(|| malformed("truncated entry data"))?;

    match method {
        0 => Ok(data.to_vec()),
        8 => {
            let mut decoded = Vec::new();
            DeflateDecoder::new(data)
                .read_to_end(&mut decoded)
                .map_err(|_| malformed("corrupt compressed data"))?;
            Ok(decoded)
        }
        other => Err(malformed(&format!("unsupported compression method {other}"))),
    }
}

fn find_eocd(bytes: &[u8]) -> Option<usize> {
    let start = bytes.len().saturating_sub(EOCD_SEARCH_WINDOW);
    (start..bytes.len().checked_sub(22)?.saturating_add(1))
        .rev()
        .find(|&i| read_u32(bytes, i) == Some(EOCD_SIGNATURE))
}

fn read_u16(bytes: &[u8], offset: usize) -> Option<u16> {
    let slice = bytes.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([slice[0], slice[1]]))
}

fn read_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    let slice = bytes.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
}

fn paragraphs_from_xml(xml: &str) -> Result<String, ApplicationError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::Text(e)) => {
                if in_text_run {
                    if let Ok(text) = e.unescape() {
                        current.push_str(&text);
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    if !current.trim().is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(malformed(&format!("invalid document XML: {e}"))),
            _ => {}
        }
    }
    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{Compression, write::DeflateEncoder};
    use std::io::Write;

    const DOC_XML: &str = r#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>First paragraph.</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Split </w:t></w:r><w:r><w:t>run.</w:t></w:r></w:p>
    <w:p><w:r><w:t>   </w:t></w:r></w:p>
    <w:p><w:r><w:t>یہ اردو ہے</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn le16(v: u16) -> [u8; 2] {
        v.to_le_bytes()
    }

    fn le32(v: u32) -> [u8; 4] {
        v.to_le_bytes()
    }

    /// Build a single-entry zip archive by hand
    fn build_archive(name: &str, data: &[u8], method: u16, uncompressed_len: u32) -> Vec<u8> {
        let mut out = Vec::new();

        // local file header
        out.extend_from_slice(&le32(LOCAL_SIGNATURE));
        out.extend_from_slice(&le16(20)); // version needed
        out.extend_from_slice(&le16(0)); // flags
        out.extend_from_slice(&le16(method));
        out.extend_from_slice(&le16(0)); // mod time
        out.extend_from_slice(&le16(0)); // mod date
        out.extend_from_slice(&le32(0)); // crc32 (unchecked)
        out.extend_from_slice(&le32(data.len() as u32));
        out.extend_from_slice(&le32(uncompressed_len));
        out.extend_from_slice(&le16(name.len() as u16));
        out.extend_from_slice(&le16(0)); // extra len
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(data);

        let central_offset = out.len() as u32;

        // central directory entry
        out.extend_from_slice(&le32(CENTRAL_SIGNATURE));
        out.extend_from_slice(&le16(20)); // version made by
        out.extend_from_slice(&le16(20)); // version needed
        out.extend_from_slice(&le16(0)); // flags
        out.extend_from_slice(&le16(method));
        out.extend_from_slice(&le16(0)); // mod time
        out.extend_from_slice(&le16(0)); // mod date
        out.extend_from_slice(&le32(0)); // crc32
        out.extend_from_slice(&le32(data.len() as u32));
        out.extend_from_slice(&le32(uncompressed_len));
        out.extend_from_slice(&le16(name.len() as u16));
        out.extend_from_slice(&le16(0)); // extra len
        out.extend_from_slice(&le16(0)); // comment len
        out.extend_from_slice(&le16(0)); // disk number
        out.extend_from_slice(&le16(0)); // internal attrs
        out.extend_from_slice(&le32(0)); // external attrs
        out.extend_from_slice(&le32(0)); // local header offset
        out.extend_from_slice(name.as_bytes());

        let central_size = out.len() as u32 - central_offset;

        // end of central directory
        out.extend_from_slice(&le32(EOCD_SIGNATURE));
        out.extend_from_slice(&le16(0)); // disk number
        out.extend_from_slice(&le16(0)); // central dir disk
        out.extend_from_slice(&le16(1)); // entries on this disk
        out.extend_from_slice(&le16(1)); // total entries
        out.extend_from_slice(&le32(central_size));
        out.extend_from_slice(&le32(central_offset));
        out.extend_from_slice(&le16(0)); // comment len

        out
    }

    fn stored_docx(xml: &str) -> Vec<u8> {
        build_archive(DOCUMENT_ENTRY, xml.as_bytes(), 0, xml.len() as u32)
    }

    fn deflated_docx(xml: &str) -> Vec<u8> {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(xml.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();
        build_archive(DOCUMENT_ENTRY, &compressed, 8, xml.len() as u32)
    }

    #[test]
    fn extracts_paragraphs_from_stored_entry() {
        let text = extract_docx_text(&stored_docx(DOC_XML)).unwrap();
        assert_eq!(text, "First paragraph.\nSplit run.\nیہ اردو ہے");
    }

    #[test]
    fn extracts_paragraphs_from_deflated_entry() {
        let text = extract_docx_text(&deflated_docx(DOC_XML)).unwrap();
        assert_eq!(text, "First paragraph.\nSplit run.\nیہ اردو ہے");
    }

    #[test]
    fn whitespace_only_paragraphs_are_dropped() {
        let xml = r#"<w:document xmlns:w="ns"><w:body>
            <w:p><w:r><w:t>  </w:t></w:r></w:p>
        </w:body></w:document>"#;
        let text = extract_docx_text(&stored_docx(xml)).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn xml_entities_are_unescaped() {
        let xml = r#"<w:document xmlns:w="ns"><w:body>
            <w:p><w:r><w:t>fish &amp; chips</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let text = extract_docx_text(&stored_docx(xml)).unwrap();
        assert_eq!(text, "fish & chips");
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = extract_docx_text(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[test]
    fn archive_without_document_body_is_rejected() {
        let archive = build_archive("word/styles.xml", b"<x/>", 0, 4);
        let err = extract_docx_text(&archive).unwrap_err();
        assert!(err.to_string().contains("no document body"));
    }
}
