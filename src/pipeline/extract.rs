//! Format dispatch: choose the extractor from the declared extension.
//!
//! The contract of this stage is "never fails": every reader degrades to
//! empty text and `None` embedded fields on any problem, so downstream
//! analysis always receives a defined (possibly empty) string. Unrecognized
//! extensions are not an error either — an archival upload endpoint sees
//! all sorts of files, and the graceful answer is an empty record, not a
//! rejection.

use super::{docx, pdf};
use crate::config::MetadataConfig;
use crate::record::ExtractedContent;
use tracing::debug;

/// Extract text and embedded fields, dispatching on the lower-cased
/// extension (without dot).
pub fn extract(bytes: &[u8], extension: &str, config: &MetadataConfig) -> ExtractedContent {
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();
    debug!("extracting {} bytes as '{}'", bytes.len(), ext);

    match ext.as_str() {
        "txt" => extract_txt(bytes),
        "docx" => docx::extract_docx(bytes),
        "pdf" => pdf::extract_pdf(bytes, config),
        _ => {
            debug!("unrecognized extension '{ext}'; returning empty content");
            ExtractedContent::default()
        }
    }
}

/// Plain text: best-effort UTF-8 decode, substituting undecodable
/// sequences rather than failing.
fn extract_txt(bytes: &[u8]) -> ExtractedContent {
    ExtractedContent {
        text: String::from_utf8_lossy(bytes).to_string(),
        author: None,
        created_at: None,
    }
}
