//! OCR collaborator seam.
//!
//! ## Why a trait instead of a bundled engine?
//!
//! Rasterising PDF pages and recognising text are the job of an external
//! engine (pdfium + tesseract, a cloud OCR API, …) with its own native
//! dependencies and failure modes. The core owns only the *decision* of when
//! to invoke OCR — strictly when the text layer yields fewer than
//! [`MetadataConfig::ocr_trigger_chars`](crate::config::MetadataConfig)
//! characters — and treats the engine itself as a black box behind this
//! trait. Callers inject an implementation through the config builder, the
//! same way a custom provider is injected in tests: a mock engine makes the
//! fallback trigger fully testable without any native OCR library.
//!
//! No engine configured means scanned PDFs degrade to empty text; the
//! pipeline continues and still produces a complete record.

use crate::error::OcrError;

/// A black-box OCR engine: PDF bytes in, recognised text out.
///
/// Implementations are expected to rasterise every page (the reference
/// behaviour is 300 DPI) and concatenate per-page output with newlines.
/// Must be `Send + Sync`: the engine is shared through an `Arc` and treated
/// as read-only across sequential requests.
pub trait OcrEngine: Send + Sync {
    /// Recognise text from a whole PDF document.
    ///
    /// A failure here is recovered by the caller — the pipeline keeps
    /// whatever text-layer content it already extracted.
    fn recognize(&self, pdf_bytes: &[u8]) -> Result<String, OcrError>;
}

impl std::fmt::Debug for dyn OcrEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<dyn OcrEngine>")
    }
}
