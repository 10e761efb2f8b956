//! Metadata generation entry points.
//!
//! This is the orchestration layer: it runs the extractor, computes the
//! document-level facts (language, word count, reading time, title), runs
//! the four analysis stages, and assembles the final
//! [`MetadataRecord`]. It is the only module that sees the whole pipeline,
//! and it encodes the two contracts downstream consumers rely on:
//!
//! * every record field is populated, with documented defaults on failure;
//! * [`generate_metadata`] itself is infallible — an unreadable *document*
//!   degrades, only an unreadable *file path* (the CLI boundary) or an
//!   invalid config (rejected earlier, at build time) produce errors.

use crate::config::MetadataConfig;
use crate::error::DocmetaError;
use crate::ner;
use crate::pipeline::{extract, keywords, sections, summary};
use crate::record::MetadataRecord;
use std::path::Path;
use tracing::{debug, info};

/// Generate the metadata record for one document.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `filename` — the document's name; supplies the extension for format
///   dispatch and the title fallback
/// * `bytes`    — raw document content
/// * `config`   — validated pipeline configuration
///
/// # Example
/// ```rust
/// use docmeta::{generate_metadata, MetadataConfig};
///
/// let record = generate_metadata("notes.txt", b"Meeting notes\n\nBudget review.", &MetadataConfig::default());
/// assert_eq!(record.title, "Meeting notes");
/// ```
pub fn generate_metadata(filename: &str, bytes: &[u8], config: &MetadataConfig) -> MetadataRecord {
    info!("generating metadata for '{}' ({} bytes)", filename, bytes.len());

    let file_type = file_type_of(filename);
    let content = extract::extract(bytes, &file_type, config);
    debug!("extracted {} chars of text", content.text.chars().count());

    let language = detect_language(&content.text);
    let word_count = content.text.split_whitespace().count();
    let reading_time_minutes = reading_time(word_count, config.words_per_minute);

    let title = detect_title(&content.text, config.title_max_words)
        .unwrap_or_else(|| title_fallback(filename));

    let tagger = config.tagger.clone().unwrap_or_else(ner::default_tagger);

    MetadataRecord {
        filename: filename.to_string(),
        file_type,
        language,
        author: content.author,
        created_at: content.created_at,
        word_count,
        reading_time_minutes,
        title,
        keywords: keywords::keywords(&content.text, config.max_keywords),
        summary: summary::summarize(&content.text, config.max_summary_sentences),
        sections: sections::sections(&content.text),
        entities: tagger.tag(&content.text),
    }
}

/// Generate metadata for a file on disk.
///
/// Fails only on boundary I/O (missing file, permission denied) — this is
/// the contract the CLI surfaces as a non-zero exit.
pub fn generate_metadata_from_file(
    path: impl AsRef<Path>,
    config: &MetadataConfig,
) -> Result<MetadataRecord, DocmetaError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DocmetaError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => DocmetaError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => DocmetaError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(generate_metadata(&filename, &bytes, config))
}

/// Generate metadata and write the JSON record to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial output.
pub fn generate_metadata_to_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &MetadataConfig,
) -> Result<MetadataRecord, DocmetaError> {
    let record = generate_metadata_from_file(input, config)?;
    let output = output.as_ref();

    let json = serde_json::to_string_pretty(&record)
        .expect("MetadataRecord serialization cannot fail");

    let write_err = |source: std::io::Error| DocmetaError::OutputWriteFailed {
        path: output.to_path_buf(),
        source,
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let tmp_path = output.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json).map_err(write_err)?;
    std::fs::rename(&tmp_path, output).map_err(write_err)?;

    Ok(record)
}

// ── Document-level facts ─────────────────────────────────────────────────

/// Lower-cased extension including the leading dot, `""` when absent.
fn file_type_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// ISO 639-1 code of the detected language, `"unknown"` on empty text or
/// when detection fails.
fn detect_language(text: &str) -> String {
    if text.trim().is_empty() {
        return "unknown".to_string();
    }
    whatlang::detect(text)
        .and_then(|info| iso639_1(info.lang()))
        .unwrap_or("unknown")
        .to_string()
}

/// Map whatlang's ISO 639-3 language to its two-letter 639-1 code.
///
/// Covers the languages with a 639-1 code that whatlang can detect;
/// anything else reports as `"unknown"` — the record promises 639-1 or
/// `"unknown"`, never a three-letter code.
fn iso639_1(lang: whatlang::Lang) -> Option<&'static str> {
    use whatlang::Lang;
    Some(match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Slk => "sk",
        Lang::Bul => "bg",
        Lang::Ron => "ro",
        Lang::Hun => "hu",
        Lang::Ell => "el",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Nob => "no",
        Lang::Fin => "fi",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Ben => "bn",
        Lang::Urd => "ur",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Mar => "mr",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Ind => "id",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Lit => "lt",
        Lang::Lav => "lv",
        Lang::Est => "et",
        Lang::Slv => "sl",
        Lang::Hrv => "hr",
        Lang::Srp => "sr",
        Lang::Cat => "ca",
        Lang::Afr => "af",
        Lang::Lat => "la",
        Lang::Pes => "fa",
        Lang::Aze => "az",
        Lang::Uzb => "uz",
        Lang::Kat => "ka",
        Lang::Hye => "hy",
        Lang::Bel => "be",
        Lang::Mkd => "mk",
        _ => return None,
    })
}

/// Estimated minutes-to-read: `ceil(word_count / wpm)`, minimum 1 for any
/// non-empty document, 0 for an empty one.
fn reading_time(word_count: usize, words_per_minute: u32) -> u64 {
    if word_count == 0 {
        return 0;
    }
    (word_count as f64 / f64::from(words_per_minute)).ceil() as u64
}

/// Title heuristic: the first text block (all lines up to the first blank
/// line), truncated to `max_words` words with an ellipsis when longer.
///
/// Returns `None` when no non-empty line precedes the first blank line —
/// the caller falls back to the filename stem.
fn detect_title(text: &str, max_words: usize) -> Option<String> {
    let mut block: Vec<&str> = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        block.push(trimmed);
    }

    let candidate = block.join(" ");
    let words: Vec<&str> = candidate.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    if words.len() > max_words {
        Some(format!("{}…", words[..max_words].join(" ")))
    } else {
        Some(candidate)
    }
}

/// Filename stem as the title of last resort; `"untitled"` when even that
/// is empty.
fn title_fallback(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "untitled".to_string())
}
