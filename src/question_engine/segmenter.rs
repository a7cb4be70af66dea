//! Sentence boundary detection.
//!
//! A boundary is a run of `.`, `!` or `?` (plus any closing quotes or
//! brackets) followed by whitespace and then something that can open a
//! sentence. A period does not end a sentence after a known abbreviation or
//! a single-letter initial. Text between boundaries is returned as-is apart
//! from the whitespace separating sentences.

use serde::{Deserialize, Serialize};

/// Lower-cased abbreviations (without the trailing period) that never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e",
    "fig", "figs", "no", "vol", "pp", "ch", "sec", "approx", "dept", "est", "inc",
    "ltd", "co", "corp", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "u.s", "cf", "al", "eq", "ed",
];

const TERMINATORS: [char; 3] = ['.', '!', '?'];
const CLOSERS: [char; 5] = ['"', '\'', ')', ']', '\u{201D}'];

/// Ordered sentences of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSet {
    sentences: Vec<String>,
}

impl SentenceSet {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.sentences
    }
}

impl From<Vec<String>> for SentenceSet {
    fn from(sentences: Vec<String>) -> Self {
        SentenceSet { sentences }
    }
}

/// Split `text` into sentences. Empty or whitespace-only input yields an empty set.
pub fn segment(text: &str) -> SentenceSet {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        let (pos, ch) = chars[i];
        if start.is_none() {
            if ch.is_whitespace() {
                i += 1;
                continue;
            }
            start = Some(pos);
        }

        if !TERMINATORS.contains(&ch) {
            i += 1;
            continue;
        }

        // Swallow "?!", "..." and trailing closers.
        let mut end = i + 1;
        while end < chars.len() && TERMINATORS.contains(&chars[end].1) {
            end += 1;
        }
        while end < chars.len() && CLOSERS.contains(&chars[end].1) {
            end += 1;
        }

        let at_text_end = end >= chars.len();
        let followed_by_space = !at_text_end && chars[end].1.is_whitespace();

        if (at_text_end || followed_by_space) && is_boundary(text, &chars, i, end) {
            let from = start.unwrap_or(pos);
            let to = if at_text_end { text.len() } else { chars[end].0 };
            sentences.push(text[from..to].to_string());
            start = None;
        }
        i = end;
    }

    if let Some(from) = start {
        let tail = text[from..].trim_end();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
    }

    SentenceSet { sentences }
}

/// Decide whether the terminator at `term_idx` (ending at `end`) closes a sentence.
fn is_boundary(text: &str, chars: &[(usize, char)], term_idx: usize, end: usize) -> bool {
    if chars[term_idx].1 == '.' {
        let word = preceding_word(text, chars, term_idx);
        let lower = word.to_lowercase();
        if ABBREVIATIONS.contains(&lower.as_str()) {
            return false;
        }
        // Single-letter initials such as "J. Smith".
        let mut letters = word.chars();
        if let (Some(c), None) = (letters.next(), letters.next()) {
            if c.is_alphabetic() {
                return false;
            }
        }
    }

    // The next sentence must open with something sentence-like.
    let next = chars[end..]
        .iter()
        .map(|&(_, c)| c)
        .find(|c| !c.is_whitespace());
    match next {
        None => true,
        Some(c) => !c.is_lowercase(),
    }
}

/// The token immediately before `term_idx`, without leading punctuation.
fn preceding_word<'a>(text: &'a str, chars: &[(usize, char)], term_idx: usize) -> &'a str {
    let end = chars[term_idx].0;
    let mut j = term_idx;
    while j > 0 && !chars[j - 1].1.is_whitespace() {
        j -= 1;
    }
    let from = if j < chars.len() { chars[j].0 } else { end };
    text[from..end].trim_start_matches(|c: char| !c.is_alphanumeric())
}
