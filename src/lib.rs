//! # docmeta
//!
//! Extract structured, semantic metadata from unstructured documents —
//! plain text, Word documents, and PDFs (including scanned ones via an
//! injectable OCR engine). Given a filename and raw bytes, produce one JSON
//! metadata record: title, keywords, extractive summary, section headings,
//! named entities, language, author, creation date, word count and reading
//! time. Built for document-archival and discoverability pipelines where
//! every upload must yield a complete record, however broken the file.
//!
//! ## Pipeline Overview
//!
//! ```text
//! bytes
//!  │
//!  ├─ 1. Extract   dispatch on extension (txt / docx / pdf)
//!  │               └─ OCR fallback when the PDF text layer is too short
//!  ├─ 2. Facts     language, word count, reading time, title heuristic
//!  ├─ 3. Analyze   keywords · summary · sections · entities
//!  └─ 4. Assemble  MetadataRecord → JSON
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use docmeta::{generate_metadata, MetadataConfig};
//!
//! let config = MetadataConfig::builder()
//!     .max_keywords(5)
//!     .max_summary_sentences(3)
//!     .build()
//!     .unwrap();
//!
//! let record = generate_metadata(
//!     "minutes.txt",
//!     b"Planning Meeting\n\nThe committee approved the budget.",
//!     &config,
//! );
//! assert_eq!(record.title, "Planning Meeting");
//! println!("{}", serde_json::to_string_pretty(&record).unwrap());
//! ```
//!
//! ## Graceful degradation
//!
//! Document-content failures never surface as errors. A corrupt PDF, a
//! truncated DOCX, a scanned document with no OCR engine configured — all
//! produce a complete, well-formed record with empty text-derived fields.
//! The only rejections are invalid configuration (caught at
//! [`MetadataConfigBuilder::build`]) and unreadable file paths at the CLI
//! boundary.
//!
//! ## Collaborator seams
//!
//! The OCR engine and the named-entity tagger are black boxes behind the
//! [`OcrEngine`] and [`EntityTagger`] traits, injected through the config
//! builder. Without an injected tagger a built-in heuristic tagger (a
//! process-wide, lazily-compiled singleton) is used; without an OCR engine
//! scanned PDFs degrade to empty text.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `docmeta` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod generate;
pub mod ner;
pub mod ocr;
pub mod pipeline;
pub mod record;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{MetadataConfig, MetadataConfigBuilder};
pub use error::{DocmetaError, OcrError};
pub use generate::{generate_metadata, generate_metadata_from_file, generate_metadata_to_file};
pub use ner::{EntityTagger, HeuristicTagger};
pub use ocr::OcrEngine;
pub use record::{Entity, ExtractedContent, MetadataRecord};
