//! Configuration for metadata generation.
//!
//! All pipeline behaviour is controlled through [`MetadataConfig`], built via
//! its [`MetadataConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share a config across requests and to see at a glance which
//! heuristic thresholds are in play.
//!
//! # Design choice: named constants over magic literals
//! The reference behaviour hinges on three fixed numbers — a 100-character
//! OCR trigger, a 20-word title cut-off, a 200-words-per-minute reading
//! speed. They are deliberately plain config fields with those exact
//! defaults: overridable, but behaviourally identical out of the box.

use crate::error::DocmetaError;
use crate::ner::EntityTagger;
use crate::ocr::OcrEngine;
use std::fmt;
use std::sync::Arc;

/// Default number of keywords returned.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;
/// Default number of sentences in the extractive summary.
pub const DEFAULT_MAX_SUMMARY_SENTENCES: usize = 5;
/// Text-layer length (chars, after trim) below which a PDF is treated as scanned.
pub const DEFAULT_OCR_TRIGGER_CHARS: usize = 100;
/// Maximum words kept from the first text block when deriving the title.
pub const DEFAULT_TITLE_MAX_WORDS: usize = 20;
/// Assumed reading speed in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Configuration for one or more metadata-generation runs.
///
/// Built via [`MetadataConfig::builder()`] or [`MetadataConfig::default()`].
///
/// # Example
/// ```rust
/// use docmeta::MetadataConfig;
///
/// let config = MetadataConfig::builder()
///     .max_keywords(5)
///     .max_summary_sentences(3)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct MetadataConfig {
    /// Maximum number of keywords in the record. Default: 10.
    pub max_keywords: usize,

    /// Maximum number of sentences in the extractive summary. Default: 5.
    pub max_summary_sentences: usize,

    /// OCR fallback trigger: a PDF whose text layer yields fewer than this
    /// many characters (after trimming) is treated as scanned. Default: 100.
    ///
    /// This is a heuristic, not a certainty test — a genuinely-text PDF with
    /// under 100 characters will trigger OCR too. That is the documented
    /// trade-off, kept for behavioural compatibility.
    pub ocr_trigger_chars: usize,

    /// Maximum words kept from the first text block for the title, with an
    /// ellipsis appended when truncation occurs. Default: 20.
    pub title_max_words: usize,

    /// Assumed reading speed used for `reading_time_minutes`. Default: 200.
    pub words_per_minute: u32,

    /// Injected OCR engine for scanned PDFs. `None` means the fallback
    /// yields empty text and the pipeline continues with the text layer.
    pub ocr: Option<Arc<dyn OcrEngine>>,

    /// Injected entity tagger. `None` means the built-in process-wide
    /// heuristic tagger is used.
    pub tagger: Option<Arc<dyn EntityTagger>>,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            max_summary_sentences: DEFAULT_MAX_SUMMARY_SENTENCES,
            ocr_trigger_chars: DEFAULT_OCR_TRIGGER_CHARS,
            title_max_words: DEFAULT_TITLE_MAX_WORDS,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            ocr: None,
            tagger: None,
        }
    }
}

impl fmt::Debug for MetadataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataConfig")
            .field("max_keywords", &self.max_keywords)
            .field("max_summary_sentences", &self.max_summary_sentences)
            .field("ocr_trigger_chars", &self.ocr_trigger_chars)
            .field("title_max_words", &self.title_max_words)
            .field("words_per_minute", &self.words_per_minute)
            .field("ocr", &self.ocr.as_ref().map(|_| "<dyn OcrEngine>"))
            .field("tagger", &self.tagger.as_ref().map(|_| "<dyn EntityTagger>"))
            .finish()
    }
}

impl MetadataConfig {
    /// Create a new builder for `MetadataConfig`.
    pub fn builder() -> MetadataConfigBuilder {
        MetadataConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`MetadataConfig`].
#[derive(Debug)]
pub struct MetadataConfigBuilder {
    config: MetadataConfig,
}

impl MetadataConfigBuilder {
    pub fn max_keywords(mut self, n: usize) -> Self {
        self.config.max_keywords = n;
        self
    }

    pub fn max_summary_sentences(mut self, n: usize) -> Self {
        self.config.max_summary_sentences = n;
        self
    }

    pub fn ocr_trigger_chars(mut self, chars: usize) -> Self {
        self.config.ocr_trigger_chars = chars;
        self
    }

    pub fn title_max_words(mut self, words: usize) -> Self {
        self.config.title_max_words = words;
        self
    }

    pub fn words_per_minute(mut self, wpm: u32) -> Self {
        self.config.words_per_minute = wpm;
        self
    }

    pub fn ocr_engine(mut self, engine: Arc<dyn OcrEngine>) -> Self {
        self.config.ocr = Some(engine);
        self
    }

    pub fn entity_tagger(mut self, tagger: Arc<dyn EntityTagger>) -> Self {
        self.config.tagger = Some(tagger);
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// This is the one place where the pipeline rejects rather than
    /// degrades: zero limits are programming errors, not document
    /// variability, and surface as [`DocmetaError::InvalidConfig`] before
    /// any extraction runs.
    pub fn build(self) -> Result<MetadataConfig, DocmetaError> {
        let c = &self.config;
        if c.max_keywords == 0 {
            return Err(DocmetaError::InvalidConfig(
                "max_keywords must be ≥ 1".into(),
            ));
        }
        if c.max_summary_sentences == 0 {
            return Err(DocmetaError::InvalidConfig(
                "max_summary_sentences must be ≥ 1".into(),
            ));
        }
        if c.title_max_words == 0 {
            return Err(DocmetaError::InvalidConfig(
                "title_max_words must be ≥ 1".into(),
            ));
        }
        if c.words_per_minute == 0 {
            return Err(DocmetaError::InvalidConfig(
                "words_per_minute must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let c = MetadataConfig::default();
        assert_eq!(c.max_keywords, 10);
        assert_eq!(c.max_summary_sentences, 5);
        assert_eq!(c.ocr_trigger_chars, 100);
        assert_eq!(c.title_max_words, 20);
        assert_eq!(c.words_per_minute, 200);
        assert!(c.ocr.is_none());
        assert!(c.tagger.is_none());
    }

    #[test]
    fn builder_rejects_zero_limits() {
        assert!(MetadataConfig::builder().max_keywords(0).build().is_err());
        assert!(MetadataConfig::builder()
            .max_summary_sentences(0)
            .build()
            .is_err());
        assert!(MetadataConfig::builder()
            .words_per_minute(0)
            .build()
            .is_err());
    }

    #[test]
    fn builder_accepts_overrides() {
        let c = MetadataConfig::builder()
            .max_keywords(3)
            .ocr_trigger_chars(50)
            .build()
            .unwrap();
        assert_eq!(c.max_keywords, 3);
        assert_eq!(c.ocr_trigger_chars, 50);
    }
}
