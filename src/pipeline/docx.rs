//! DOCX extraction: paragraph text and core properties from the OOXML
//! container.
//!
//! A `.docx` file is a ZIP archive. The body lives in `word/document.xml`
//! (one `<w:p>` element per paragraph, text inside `<w:t>` runs) and the
//! embedded author/creation-date fields in `docProps/core.xml`
//! (`dc:creator`, `dcterms:created`). The markup subset we touch is narrow
//! and stable, so the extraction is a small set of targeted regex passes
//! over the XML rather than a full parser: paragraph and line breaks become
//! newlines, remaining tags are stripped, entities are decoded.
//!
//! A property-read failure never fails text extraction — the fields just
//! come back `None`.

use crate::record::ExtractedContent;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{Cursor, Read};
use tracing::warn;
use zip::ZipArchive;

static RE_PARAGRAPH_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"</w:p\s*>").unwrap());

/// Text runs and in-paragraph breaks, matched in document order.
static RE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>|<w:(br|cr|tab)\s*/?>").unwrap());

static RE_CREATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<dc:creator>([^<]*)</dc:creator>").unwrap());
static RE_CREATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<dcterms:created[^>]*>([^<]*)</dcterms:created>").unwrap());

/// Extract text and embedded fields from a DOCX, never failing.
///
/// Corrupt containers degrade to empty text and `None` fields.
pub fn extract_docx(bytes: &[u8]) -> ExtractedContent {
    let mut archive = match ZipArchive::new(Cursor::new(bytes)) {
        Ok(archive) => archive,
        Err(e) => {
            warn!("DOCX container unreadable: {e}");
            return ExtractedContent::default();
        }
    };

    let text = match read_archive_entry(&mut archive, "word/document.xml") {
        Some(xml) => document_text(&xml),
        None => String::new(),
    };

    let (author, created_at) = match read_archive_entry(&mut archive, "docProps/core.xml") {
        Some(xml) => core_properties(&xml),
        None => (None, None),
    };

    ExtractedContent {
        text,
        author,
        created_at,
    }
}

/// Read one named entry from the archive as a string, `None` on any failure.
fn read_archive_entry(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> Option<String> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(e) => {
            warn!("DOCX entry '{name}' missing: {e}");
            return None;
        }
    };
    let mut xml = String::new();
    if let Err(e) = entry.read_to_string(&mut xml) {
        warn!("DOCX entry '{name}' unreadable: {e}");
        return None;
    }
    Some(xml)
}

/// Paragraph texts in document order, joined with newline separators.
///
/// Empty paragraphs become empty lines — the title heuristic downstream
/// depends on the first blank line, so they are preserved, not dropped.
fn document_text(xml: &str) -> String {
    RE_PARAGRAPH_END
        .split(xml)
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Concatenate the `<w:t>` runs of one paragraph, honouring in-run breaks.
fn paragraph_text(paragraph_xml: &str) -> String {
    let mut out = String::new();
    for caps in RE_RUN.captures_iter(paragraph_xml) {
        if let Some(text) = caps.get(1) {
            out.push_str(&decode_entities(text.as_str()));
        } else if let Some(kind) = caps.get(2) {
            out.push(if kind.as_str() == "tab" { '\t' } else { '\n' });
        }
    }
    out
}

/// `dc:creator` and `dcterms:created` from core.xml.
///
/// `dcterms:created` is already W3C/ISO-8601 formatted in OOXML; it is
/// passed through after entity decoding.
fn core_properties(xml: &str) -> (Option<String>, Option<String>) {
    let capture = |re: &Regex| -> Option<String> {
        re.captures(xml)
            .and_then(|caps| caps.get(1))
            .map(|m| decode_entities(m.as_str()).trim().to_string())
            .filter(|s| !s.is_empty())
    };
    (capture(&RE_CREATOR), capture(&RE_CREATED))
}

/// Decode the five predefined XML entities.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    /// Build a minimal DOCX container in memory.
    fn docx_bytes(document_xml: &str, core_xml: Option<&str>) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            let options = SimpleFileOptions::default();
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            if let Some(core) = core_xml {
                writer.start_file("docProps/core.xml", options).unwrap();
                writer.write_all(core.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        buffer.into_inner()
    }

    const DOCUMENT: &str = r#"<?xml version="1.0"?><w:document><w:body>
        <w:p><w:r><w:t>First paragraph.</w:t></w:r></w:p>
        <w:p><w:r><w:t>Second </w:t></w:r><w:r><w:t>paragraph.</w:t></w:r></w:p>
        </w:body></w:document>"#;

    const CORE: &str = r#"<?xml version="1.0"?><cp:coreProperties>
        <dc:creator>Jane Doe</dc:creator>
        <dcterms:created xsi:type="dcterms:W3CDTF">2023-06-01T10:00:00Z</dcterms:created>
        </cp:coreProperties>"#;

    #[test]
    fn paragraphs_join_with_newlines() {
        let content = extract_docx(&docx_bytes(DOCUMENT, None));
        assert_eq!(content.text, "First paragraph.\nSecond paragraph.");
    }

    #[test]
    fn core_properties_are_read() {
        let content = extract_docx(&docx_bytes(DOCUMENT, Some(CORE)));
        assert_eq!(content.author.as_deref(), Some("Jane Doe"));
        assert_eq!(content.created_at.as_deref(), Some("2023-06-01T10:00:00Z"));
    }

    #[test]
    fn missing_core_xml_leaves_fields_none_without_failing_text() {
        let content = extract_docx(&docx_bytes(DOCUMENT, None));
        assert!(!content.text.is_empty());
        assert_eq!(content.author, None);
        assert_eq!(content.created_at, None);
    }

    #[test]
    fn corrupt_container_degrades_to_default() {
        let content = extract_docx(b"these are not zip bytes");
        assert_eq!(content, ExtractedContent::default());
    }

    #[test]
    fn xml_entities_are_decoded() {
        let xml = r#"<w:p><w:t>Profit &amp; Loss &lt;draft&gt;</w:t></w:p>"#;
        let content = extract_docx(&docx_bytes(xml, None));
        assert_eq!(content.text, "Profit & Loss <draft>");
    }
}
