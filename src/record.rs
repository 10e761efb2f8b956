//! Output and intermediate data types.
//!
//! [`MetadataRecord`] is the single artefact this crate produces. Every field
//! is always present in the serialized JSON — consumers (UI badge panels,
//! archival indexes, tests) never branch on a missing key. When extraction
//! fails the record degrades to empty strings, empty vectors and `null`
//! optionals rather than disappearing, so a scanned invoice with no OCR
//! engine configured still round-trips cleanly through `serde_json`.

use serde::{Deserialize, Serialize};

/// Raw output of the text-extraction stage, consumed by the orchestrator.
///
/// `text` is always defined — empty on total extraction failure, never
/// absent — so the analysis stages never branch on `Option`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Concatenated document text (paragraphs/pages joined with newlines).
    pub text: String,
    /// Embedded author field, when the format carries one.
    pub author: Option<String>,
    /// Embedded creation date as an ISO-8601 string, when present and parseable.
    pub created_at: Option<String>,
}

/// A single named-entity mention.
///
/// Duplicates are deliberate: repeated mentions of the same entity are
/// meaningful signal, and deduplication is left to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The mention text exactly as it appears in the document.
    pub text: String,
    /// Tagger label, e.g. `PERSON`, `ORG`, `DATE`, `MONEY`.
    pub label: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// The assembled metadata record for one document.
///
/// Built once by [`generate_metadata`](crate::generate::generate_metadata),
/// immutable after return, serialized to JSON at the system boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Original filename as supplied by the caller.
    pub filename: String,
    /// Lower-cased extension including the leading dot (`".pdf"`), or `""`.
    pub file_type: String,
    /// ISO 639-1 language code, or `"unknown"`.
    pub language: String,
    /// Embedded author, `null` when unavailable.
    pub author: Option<String>,
    /// Embedded creation date (ISO-8601), `null` when unavailable.
    pub created_at: Option<String>,
    /// Whitespace-delimited token count of the extracted text.
    pub word_count: usize,
    /// Estimated minutes to read; 0 only for an empty document.
    pub reading_time_minutes: u64,
    /// Document title; never empty (falls back to the filename stem).
    pub title: String,
    /// Top-ranked distinct keywords, at most `max_keywords`.
    pub keywords: Vec<String>,
    /// Extractive summary: selected sentences in original document order.
    pub summary: String,
    /// Distinct section headings, first-occurrence order.
    pub sections: Vec<String>,
    /// Entity mentions in tagger order, duplicates included.
    pub entities: Vec<Entity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MetadataRecord {
        MetadataRecord {
            filename: "report.pdf".into(),
            file_type: ".pdf".into(),
            language: "en".into(),
            author: Some("J. Doe".into()),
            created_at: None,
            word_count: 42,
            reading_time_minutes: 1,
            title: "Annual Report".into(),
            keywords: vec!["revenue".into(), "growth".into()],
            summary: "Revenue grew.".into(),
            sections: vec!["Introduction".into()],
            entities: vec![Entity::new("Acme Corp", "ORG")],
        }
    }

    #[test]
    fn json_round_trip_preserves_all_fields() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn null_optionals_serialize_as_null() {
        let mut record = sample_record();
        record.author = None;
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("author").unwrap().is_null());
        assert!(json.get("created_at").unwrap().is_null());
    }

    #[test]
    fn field_names_match_the_output_contract() {
        let json = serde_json::to_value(sample_record()).unwrap();
        for key in [
            "filename",
            "file_type",
            "language",
            "author",
            "created_at",
            "word_count",
            "reading_time_minutes",
            "title",
            "keywords",
            "summary",
            "sections",
            "entities",
        ] {
            assert!(json.get(key).is_some(), "missing field: {key}");
        }
    }
}
