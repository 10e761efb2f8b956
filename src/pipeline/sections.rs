//! Section-heading detection.
//!
//! Works on raw line-split text — this is the one analysis stage that must
//! *not* run on the whitespace-collapsed view, because the signal is the
//! line structure itself. Two heuristics qualify a line as a heading:
//!
//! * **ALL-CAPS**: the trimmed line consists only of uppercase letters,
//!   digits, spaces and hyphens, contains at least one letter, and its
//!   length is plausible for a heading (3–60 chars). Emitted in title case
//!   for display.
//! * **Numbered**: a numeric prefix such as `1.`, `2.3`, `4.1.2 Title`,
//!   followed by text. Emitted verbatim.
//!
//! The exact bounds and prefix pattern are implementation-defined
//! heuristics; the behavioural contract is dedup with first-occurrence
//! order (a heading repeated in a table of contents counts once, at its
//! first position).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Shortest trimmed line considered a plausible ALL-CAPS heading.
const MIN_HEADING_CHARS: usize = 3;
/// Longest trimmed line considered a plausible heading of either kind.
const MAX_HEADING_CHARS: usize = 60;

static RE_ALL_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9 \-]+$").unwrap());

/// Numeric prefix (`1.`, `1.1`, `2.3.4.`) followed by at least one letter.
/// The prefix must end in a dot or carry at least one dotted level, so a
/// prose line that merely opens with a number (`2023 was...`, `3rd
/// quarter...`) does not qualify.
static RE_NUMBERED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(?:\.\d+)*\.\s*[A-Za-z]|^\d+(?:\.\d+)+\s+[A-Za-z]").unwrap()
});

/// Extract distinct section headings in first-occurrence order.
pub fn sections(text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut headings: Vec<String> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_HEADING_CHARS {
            continue;
        }

        let heading = if trimmed.len() >= MIN_HEADING_CHARS
            && RE_ALL_CAPS.is_match(trimmed)
            && trimmed.chars().any(|c| c.is_ascii_alphabetic())
        {
            title_case(trimmed)
        } else if RE_NUMBERED.is_match(trimmed) {
            trimmed.to_string()
        } else {
            continue;
        };

        if seen.insert(heading.clone()) {
            headings.push(heading);
        }
    }

    headings
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            if at_word_start {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c.to_ascii_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
