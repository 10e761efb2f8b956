//! Shared text preprocessing for the analysis stages.
//!
//! Keyword extraction and summarisation both work on the same cleaned,
//! tokenized view of the document; section detection is the deliberate
//! exception and reads the raw line-split text (cleaning would destroy the
//! line structure it depends on).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Alphabetic unigrams of two or more letters, matched case-sensitively and
/// lowered by the tokenizer.
static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]{2,}").unwrap());

/// Collapse all whitespace runs (spaces, tabs, newlines) to single spaces
/// and trim the ends.
pub fn clean(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Lowercased alphabetic tokens with stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    RE_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|t| !STOP_WORDS.contains(t.as_str()))
        .collect()
}

/// Split cleaned text into trimmed, non-empty sentences.
///
/// Uses the Unicode sentence-boundary rules (UAX #29) as the black-box
/// splitter; good enough for extractive summarisation and entirely
/// deterministic.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.unicode_sentences()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// English stop-word list applied during tokenization.
///
/// A conventional frequency-based list; matching an exact vectorizer default
/// is not a goal, only that ubiquitous function words never surface as
/// keywords.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for", "not", "on",
        "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
        "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
        "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
        "make", "can", "like", "no", "just", "him", "know", "take", "into", "your", "some",
        "could", "them", "see", "other", "than", "then", "now", "only", "come", "its", "over",
        "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
        "even", "new", "want", "because", "any", "these", "give", "day", "most", "us", "is",
        "was", "are", "been", "has", "had", "were", "said", "did", "having", "may", "should",
        "does", "am", "such", "each", "more", "very", "both", "between", "own", "same", "being",
        "during", "before", "under", "while", "where", "why", "again", "against", "through",
        "until", "once", "here", "few", "those", "off", "too", "above", "below", "further",
    ]
    .into_iter()
    .collect()
});
