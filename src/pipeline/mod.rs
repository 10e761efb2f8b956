//! Pipeline stages for metadata generation.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap an
//! implementation (e.g. a different PDF backend) without touching the
//! others.
//!
//! ## Data Flow
//!
//! ```text
//! bytes ──▶ extract ──▶ text ──▶ { keywords, summary, sections, entities }
//!           (txt/docx/pdf          (shared clean/tokenize view)
//!            + OCR decision)
//! ```
//!
//! 1. [`extract`]  — dispatch on the declared extension; never fails
//! 2. [`pdf`]      — text layer, info dictionary, OCR fallback decision
//! 3. [`docx`]     — OOXML paragraphs and core properties
//! 4. [`text`]     — cleaning, tokenization, sentence splitting
//! 5. [`keywords`] — single-document TF-IDF unigram ranking
//! 6. [`summary`]  — TF-IDF sentence scoring with positional reorder
//! 7. [`sections`] — line-based heading heuristics with ordered dedup

pub mod docx;
pub mod extract;
pub mod keywords;
pub mod pdf;
pub mod sections;
pub mod summary;
pub mod text;
