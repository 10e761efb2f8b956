//! Error types for the docmeta library.
//!
//! The pipeline deliberately has very few error variants. Document-content
//! problems (corrupt PDF, garbled DOCX, OCR engine failure) are *not* errors
//! here: every extraction stage degrades to an empty/default value and logs a
//! warning, so a broken upload still yields a complete, well-formed
//! [`MetadataRecord`](crate::record::MetadataRecord). What remains as `Err`
//! is the small set of caller mistakes and boundary I/O failures:
//!
//! * [`DocmetaError`] — programming/config errors (an invalid
//!   [`MetadataConfig`](crate::config::MetadataConfig)) and file I/O at the
//!   CLI boundary (missing file, unwritable output).
//!
//! * [`OcrError`] — the one error type that crosses the collaborator seam:
//!   an [`OcrEngine`](crate::ocr::OcrEngine) implementation reports failure
//!   through it, and the extractor recovers by keeping whatever text-layer
//!   content it already had.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the docmeta library.
///
/// Extraction and analysis never produce these; see the module docs for the
/// graceful-degradation contract.
#[derive(Debug, Error)]
pub enum DocmetaError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but reading it failed part-way.
    #[error("failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output JSON file.
    #[error("failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure reported by an [`OcrEngine`](crate::ocr::OcrEngine) implementation.
///
/// Engines wrap whatever their backend raises (subprocess exit status,
/// missing shared library, rasterisation fault). The extractor never
/// propagates this; it logs and continues with the text-layer content.
#[derive(Debug, Error)]
#[error("OCR engine failed: {0}")]
pub struct OcrError(pub Box<dyn std::error::Error + Send + Sync>);

impl OcrError {
    /// Build an `OcrError` from a plain message.
    pub fn message(msg: impl Into<String>) -> Self {
        OcrError(msg.into().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display() {
        let e = DocmetaError::InvalidConfig("max_keywords must be ≥ 1".into());
        assert!(e.to_string().contains("max_keywords"));
    }

    #[test]
    fn file_not_found_display() {
        let e = DocmetaError::FileNotFound {
            path: PathBuf::from("/no/such/report.pdf"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/no/such/report.pdf"), "got: {msg}");
    }

    #[test]
    fn ocr_error_from_message() {
        let e = OcrError::message("tesseract exited with status 1");
        assert!(e.to_string().contains("tesseract"));
    }
}
