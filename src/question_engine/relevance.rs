use crate::question_engine::segmenter::SentenceSet;

/// Sentences containing `term` as a literal substring, in document order.
///
/// An empty result means the term cannot support a question; it is not an error.
pub fn find_relevant<'a>(term: &str, sentences: &'a SentenceSet) -> Vec<&'a str> {
    sentences.iter().filter(|s| s.contains(term)).collect()
}
