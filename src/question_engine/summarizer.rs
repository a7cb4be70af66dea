//! Frequency-weighted extractive summary.
//!
//! Count every non-stop-word token across the input, punctuation included,
//! keep the `top_n` most frequent (ties go to whichever appeared first), then
//! return every input sentence containing at least one of them, joined by
//! single spaces. A sentence-final `.` usually ranks first, so most inputs
//! summarise to themselves.

use indexmap::IndexMap;

use crate::question_engine::{
    resources::LinguisticResources,
    tagger::tokenize_words,
};

/// Most frequent non-stop-word tokens, highest count first, ties in first-seen order.
pub fn top_terms(
    sentences: &[&str],
    resources: &LinguisticResources,
    top_n: usize,
) -> Vec<String> {
    let joined = sentences.join(" ");

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in tokenize_words(&joined) {
        if resources.is_stopword(token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(term, _)| term.to_string())
        .collect()
}

/// Summarise `sentences` into one answer string; empty input gives `""`.
pub fn summarize(
    sentences: &[&str],
    resources: &LinguisticResources,
    top_n: usize,
) -> String {
    if sentences.is_empty() {
        return String::new();
    }
    let terms = top_terms(sentences, resources, top_n);
    sentences
        .iter()
        .copied()
        .filter(|s| terms.iter().any(|t| s.contains(t.as_str())))
        .collect::<Vec<&str>>()
        .join(" ")
}
