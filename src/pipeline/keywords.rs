//! Keyword extraction: top-k unigrams by single-document TF-IDF.
//!
//! ## Why "TF-IDF" when there is only one document?
//!
//! The corpus is deliberately the document itself, so document frequency is
//! 1 for every term and the IDF factor degenerates to a constant. What is
//! left is a smoothed term-frequency ranking — that degenerate behaviour is
//! the specified scope, not an approximation of a richer corpus-wide model.
//! Ties are broken by first occurrence so the ranking is deterministic and
//! favours terms the author leads with.

use super::text::{clean, tokenize};
use std::collections::HashMap;

/// Return the top `max_keywords` distinct tokens, ranked by term frequency
/// descending, ties broken by first occurrence.
///
/// Empty or all-stop-word text yields an empty vector. Fewer distinct
/// tokens than `max_keywords` yields them all.
pub fn keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let tokens = tokenize(&clean(text));

    // (count, first occurrence index) per distinct token
    let mut stats: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, token) in tokens.into_iter().enumerate() {
        let entry = stats.entry(token).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = stats.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });

    ranked
        .into_iter()
        .take(max_keywords)
        .map(|(token, _)| token)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_frequency_then_first_occurrence() {
        let text = "pipeline pipeline metadata extraction metadata pipeline extraction archive";
        assert_eq!(
            keywords(text, 3),
            vec!["pipeline", "metadata", "extraction"]
        );
    }

    #[test]
    fn never_exceeds_the_limit_and_stays_distinct() {
        let text = "alpha beta gamma alpha beta alpha";
        let kws = keywords(text, 2);
        assert_eq!(kws.len(), 2);
        let mut deduped = kws.clone();
        deduped.dedup();
        assert_eq!(kws, deduped);
    }

    #[test]
    fn returns_all_tokens_when_fewer_than_limit() {
        assert_eq!(keywords("singular", 10), vec!["singular"]);
    }

    #[test]
    fn empty_text_yields_empty_list() {
        assert!(keywords("", 10).is_empty());
        assert!(keywords("the and of", 10).is_empty());
    }

    #[test]
    fn case_insensitive_counting() {
        assert_eq!(keywords("Rust rust RUST ocaml", 1), vec!["rust"]);
    }
}
