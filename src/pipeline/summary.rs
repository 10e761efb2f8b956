//! Extractive summarisation: TF-IDF sentence scoring with positional reorder.
//!
//! Scoring decides *which* sentences make the summary; position decides the
//! *output order*. A relevance-ordered summary reads like a ransom note, so
//! after selecting the top sentences by score they are re-sorted into their
//! original document positions before joining.
//!
//! The TF-IDF corpus here is the sentence collection of this one document
//! (each sentence a tiny "document"), with the conventional smoothed IDF
//! `ln((1 + n) / (1 + df)) + 1` so a term present in every sentence still
//! contributes a floor weight rather than zero.

use super::text::{clean, split_sentences, tokenize};
use std::collections::{HashMap, HashSet};

/// Produce an extractive summary of at most `max_sentences` sentences,
/// joined with single spaces, in original document order.
///
/// Documents with `max_sentences` or fewer sentences are returned whole.
/// Empty text yields an empty string.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(&clean(text));
    if sentences.is_empty() {
        return String::new();
    }
    if sentences.len() <= max_sentences {
        return sentences.join(" ");
    }

    let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s)).collect();

    // Document frequency over the sentence corpus.
    let mut df: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in distinct {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let n = sentences.len() as f64;
    let idf = |term: &str| -> f64 {
        let df = df.get(term).copied().unwrap_or(0) as f64;
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    };

    // Score = sum of tf × idf over the sentence's terms.
    let mut scored: Vec<(usize, f64)> = tokenized
        .iter()
        .enumerate()
        .map(|(index, tokens)| {
            let mut tf: HashMap<&str, usize> = HashMap::new();
            for token in tokens {
                *tf.entry(token).or_insert(0) += 1;
            }
            let score: f64 = tf
                .into_iter()
                .map(|(term, count)| count as f64 * idf(term))
                .sum();
            (index, score)
        })
        .collect();

    // Highest score first; earlier sentence wins ties.
    scored.sort_by(|(index_a, score_a), (index_b, score_b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(index_a.cmp(index_b))
    });

    let mut selected: Vec<usize> = scored
        .into_iter()
        .take(max_sentences)
        .map(|(index, _)| index)
        .collect();
    selected.sort_unstable();

    selected
        .into_iter()
        .map(|index| sentences[index].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_documents_come_back_whole_in_order() {
        let text = "Alpha beta. Gamma delta. Epsilon zeta.";
        assert_eq!(summarize(text, 5), "Alpha beta. Gamma delta. Epsilon zeta.");
        assert_eq!(summarize(text, 3), "Alpha beta. Gamma delta. Epsilon zeta.");
    }

    #[test]
    fn empty_text_yields_empty_summary() {
        assert_eq!(summarize("", 3), "");
        assert_eq!(summarize("   \n\t ", 3), "");
    }

    #[test]
    fn selected_sentences_appear_in_document_order() {
        // The dense closing sentence outscores the opener; output order must
        // still follow the source.
        let text = "Pigeons exist. Filler here. More filler. Again filler. \
                    Quantum metadata pipelines analyze quantum metadata pipelines thoroughly.";
        let summary = summarize(text, 2);
        let first = summary.find("Pigeons").or_else(|| summary.find("Filler"));
        let last = summary.find("Quantum metadata");
        if let (Some(first), Some(last)) = (first, last) {
            assert!(first < last, "summary out of order: {summary}");
        } else {
            assert!(last.is_some(), "high-scoring sentence missing: {summary}");
        }
    }

    #[test]
    fn respects_the_sentence_limit() {
        let text = "One ocean. Two oceans here. Three oceans over there. \
                    Four oceans everywhere. Five oceans remain.";
        let summary = summarize(text, 2);
        let count = summary.matches('.').count();
        assert_eq!(count, 2, "expected 2 sentences, got: {summary}");
    }

    #[test]
    fn repeated_terms_raise_sentence_score() {
        let text = "Nothing notable today. Filler words pad lines. \
                    Telescope telescope telescope telescope telescope calibration. \
                    Another plain line ends.";
        let summary = summarize(text, 1);
        assert!(
            summary.contains("Telescope"),
            "expected the repeated-term sentence, got: {summary}"
        );
    }
}
