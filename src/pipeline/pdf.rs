//! PDF extraction: text layer, embedded info fields, OCR fallback decision.
//!
//! ## Two libraries, two jobs
//!
//! `pdf-extract` walks the content streams and rebuilds the text layer;
//! `lopdf` gives structured access to the document-information dictionary
//! (`/Author`, `/CreationDate`). Using each for what it is good at is the
//! same split the larger ingestion pipelines in this space settle on.
//!
//! ## The OCR decision lives here, the OCR engine does not
//!
//! A scanned PDF has (almost) no text layer. The trigger is deliberately
//! crude: fewer than `ocr_trigger_chars` characters after trimming means
//! "treat as scanned" — independent of page count or file size. Short
//! genuinely-text PDFs will trip it; that is the documented trade-off, not
//! a bug. The engine itself is an injected black box (see [`crate::ocr`]).

use crate::config::MetadataConfig;
use crate::record::ExtractedContent;
use chrono::{NaiveDate, NaiveDateTime};
use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Extract text and embedded fields from a PDF, never failing.
///
/// Corrupt bytes degrade to empty text and `None` fields.
pub fn extract_pdf(bytes: &[u8], config: &MetadataConfig) -> ExtractedContent {
    let primary = text_layer(bytes);
    let text = apply_ocr_fallback(bytes, primary, config);
    let (author, created_at) = info_fields(bytes);
    ExtractedContent {
        text,
        author,
        created_at,
    }
}

/// Primary text-layer extraction via `pdf-extract`.
///
/// Wrapped in `catch_unwind` because `pdf-extract` is known to panic on
/// some malformed files, and the extractor contract is "never fails".
fn text_layer(bytes: &[u8]) -> String {
    let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));
    match extracted {
        Ok(Ok(text)) => text.trim().to_string(),
        Ok(Err(e)) => {
            warn!("PDF text-layer extraction failed: {e}");
            String::new()
        }
        Err(_) => {
            warn!("PDF text-layer extraction panicked; treating as empty");
            String::new()
        }
    }
}

/// Apply the OCR fallback decision to the primary extraction result.
///
/// Triggers strictly on `primary.chars().count() < config.ocr_trigger_chars`.
/// On trigger, the engine's output *replaces* the text layer when it
/// succeeds; engine failure (or no engine configured) keeps the primary
/// content, however short.
pub(crate) fn apply_ocr_fallback(
    bytes: &[u8],
    primary: String,
    config: &MetadataConfig,
) -> String {
    if primary.chars().count() >= config.ocr_trigger_chars {
        return primary;
    }

    debug!(
        "text layer below {} chars; treating PDF as scanned",
        config.ocr_trigger_chars
    );

    let Some(engine) = config.ocr.as_ref() else {
        warn!("no OCR engine configured; scanned PDF degrades to text-layer content");
        return primary;
    };

    match engine.recognize(bytes) {
        Ok(recognized) => recognized,
        Err(e) => {
            warn!("OCR fallback failed, keeping text-layer content: {e}");
            primary
        }
    }
}

/// Read `/Author` and `/CreationDate` from the info dictionary.
fn info_fields(bytes: &[u8]) -> (Option<String>, Option<String>) {
    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("PDF info dictionary unavailable: {e}");
            return (None, None);
        }
    };

    let info = doc
        .trailer
        .get(b"Info")
        .and_then(|obj| doc.dereference(obj))
        .and_then(|(_, obj)| obj.as_dict());

    let Ok(info) = info else {
        return (None, None);
    };

    let field = |key: &[u8]| -> Option<String> {
        info.get(key)
            .ok()
            .and_then(|obj| obj.as_str().ok())
            .map(decode_pdf_string)
            .filter(|s| !s.is_empty())
    };

    let author = field(b"Author");
    let created_at = field(b"CreationDate").and_then(|raw| normalize_pdf_date(&raw));
    (author, created_at)
}

/// Decode a PDF string object: UTF-16BE when BOM-prefixed, else lossy UTF-8.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
    .trim()
    .to_string()
}

/// Normalise a PDF date (`D:YYYYMMDDHHmmSS` with optional `Z`/`±HH'mm'`
/// offset) to ISO-8601. Malformed dates yield `None` rather than an error.
pub(crate) fn normalize_pdf_date(raw: &str) -> Option<String> {
    let s = raw.trim().strip_prefix("D:").unwrap_or(raw.trim());

    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    let rest = &s[digits.len()..];

    let stamp = if digits.len() >= 14 {
        NaiveDateTime::parse_from_str(&digits[..14], "%Y%m%d%H%M%S").ok()?
    } else if digits.len() >= 8 {
        NaiveDate::parse_from_str(&digits[..8], "%Y%m%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?
    } else {
        return None;
    };

    let offset = parse_utc_offset(rest);
    match offset {
        Some(offset) => Some(format!("{}{}", stamp.format("%Y-%m-%dT%H:%M:%S"), offset)),
        None => Some(stamp.format("%Y-%m-%dT%H:%M:%S").to_string()),
    }
}

/// Parse the tail of a PDF date: `Z`, or `±HH'mm'` in its common spellings.
fn parse_utc_offset(rest: &str) -> Option<String> {
    let mut chars = rest.chars();
    match chars.next()? {
        'Z' => Some("Z".to_string()),
        sign @ ('+' | '-') => {
            let tail: String = chars.filter(|c| c.is_ascii_digit()).collect();
            if tail.len() >= 4 {
                Some(format!("{sign}{}:{}", &tail[..2], &tail[2..4]))
            } else if tail.len() >= 2 {
                Some(format!("{sign}{}:00", &tail[..2]))
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OcrError;
    use crate::ocr::OcrEngine;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingEngine {
        calls: Arc<AtomicUsize>,
        output: Result<String, ()>,
    }

    impl OcrEngine for CountingEngine {
        fn recognize(&self, _pdf_bytes: &[u8]) -> Result<String, OcrError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.output
                .clone()
                .map_err(|_| OcrError::message("engine unavailable"))
        }
    }

    fn config_with_engine(engine: CountingEngine) -> MetadataConfig {
        MetadataConfig::builder()
            .ocr_engine(Arc::new(engine))
            .build()
            .unwrap()
    }

    #[test]
    fn short_text_layer_triggers_ocr() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = config_with_engine(CountingEngine {
            calls: Arc::clone(&calls),
            output: Ok("recognised page text".into()),
        });

        let primary: String = "x".repeat(50);
        let text = apply_ocr_fallback(b"%PDF-", primary, &config);
        assert_eq!(text, "recognised page text");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn long_text_layer_skips_ocr() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = config_with_engine(CountingEngine {
            calls: Arc::clone(&calls),
            output: Ok("should not be used".into()),
        });

        let primary: String = "y".repeat(500);
        let text = apply_ocr_fallback(b"%PDF-", primary.clone(), &config);
        assert_eq!(text, primary);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn ocr_failure_keeps_text_layer_content() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = config_with_engine(CountingEngine {
            calls: Arc::clone(&calls),
            output: Err(()),
        });

        let text = apply_ocr_fallback(b"%PDF-", "tiny".into(), &config);
        assert_eq!(text, "tiny");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn no_engine_means_graceful_degradation() {
        let config = MetadataConfig::default();
        assert_eq!(apply_ocr_fallback(b"%PDF-", "tiny".into(), &config), "tiny");
    }

    #[test]
    fn corrupt_bytes_degrade_to_empty_content() {
        let config = MetadataConfig::default();
        let content = extract_pdf(b"not a pdf at all", &config);
        assert_eq!(content.text, "");
        assert_eq!(content.author, None);
        assert_eq!(content.created_at, None);
    }

    #[test]
    fn normalizes_full_pdf_dates() {
        assert_eq!(
            normalize_pdf_date("D:20230601120000+02'00'").as_deref(),
            Some("2023-06-01T12:00:00+02:00")
        );
        assert_eq!(
            normalize_pdf_date("D:20230601120000Z").as_deref(),
            Some("2023-06-01T12:00:00Z")
        );
        assert_eq!(
            normalize_pdf_date("20231115093000").as_deref(),
            Some("2023-11-15T09:30:00")
        );
    }

    #[test]
    fn normalizes_date_only_stamps() {
        assert_eq!(
            normalize_pdf_date("D:20230601").as_deref(),
            Some("2023-06-01T00:00:00")
        );
    }

    #[test]
    fn malformed_dates_yield_none() {
        assert_eq!(normalize_pdf_date(""), None);
        assert_eq!(normalize_pdf_date("D:19"), None);
        assert_eq!(normalize_pdf_date("yesterday"), None);
        assert_eq!(normalize_pdf_date("D:20231399000000"), None);
    }

    #[test]
    fn decodes_utf16_pdf_strings() {
        let bytes = [0xFE, 0xFF, 0x00, b'J', 0x00, b'o'];
        assert_eq!(decode_pdf_string(&bytes), "Jo");
        assert_eq!(decode_pdf_string(b"Jane Doe"), "Jane Doe");
    }
}
