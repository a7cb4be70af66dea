use std::collections::HashSet;

use crate::question_engine::{
    randomness::Randomness,
    segmenter::SentenceSet,
    tagger::{tokenize_words, Tagger},
};

/// Deduplicated concepts, drawn destructively during one run.
///
/// Extraction keeps first-seen order; callers shuffle before drawing when
/// they want to avoid always exhausting the same concepts first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptPool {
    concepts: Vec<String>,
}

impl ConceptPool {
    /// Build a pool, dropping repeated surface forms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let concepts = terms
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| seen.insert(t.clone()))
            .collect();
        ConceptPool { concepts }
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.concepts.iter().any(|c| c == term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.concepts.iter().map(String::as_str)
    }

    /// Remove and return one concept; `None` once exhausted.
    pub fn draw(&mut self) -> Option<String> {
        self.concepts.pop()
    }

    pub fn shuffle<R: Randomness + ?Sized>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.concepts);
    }
}

/// Collect every noun-tagged token across `sentences`.
///
/// Surface forms are kept exactly: no case folding, no lemmatisation, so
/// "Cells" and "cell" are distinct concepts.
pub fn extract_concepts(sentences: &SentenceSet, tagger: &dyn Tagger) -> ConceptPool {
    let mut terms = Vec::new();
    for sentence in sentences.iter() {
        let tokens = tokenize_words(sentence);
        let tags = tagger.tag(&tokens);
        terms.extend(
            tokens
                .iter()
                .zip(tags)
                .filter(|(_, tag)| tag.is_noun())
                .map(|(token, _)| token.to_string()),
        );
    }
    ConceptPool::from_terms(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::{resources, segmenter::segment};

    const CELL_TEXT: &str = "The mitochondria is the powerhouse of the cell. \
                             Cells require energy to function. \
                             Energy production occurs in the mitochondria.";

    #[test]
    fn extracts_nouns_from_cell_text() {
        let pool = extract_concepts(&segment(CELL_TEXT), resources::shared().tagger());
        for expected in ["mitochondria", "powerhouse", "cell", "energy", "production"] {
            assert!(pool.contains(expected), "missing {expected}: {:?}", pool);
        }
        assert!(!pool.contains("require"));
        assert!(!pool.contains("the"));
        assert!(!pool.contains("."));
    }

    #[test]
    fn duplicates_collapse_but_case_variants_stay() {
        let pool = extract_concepts(&segment(CELL_TEXT), resources::shared().tagger());
        assert_eq!(pool.iter().filter(|c| *c == "mitochondria").count(), 1);
        assert!(pool.contains("Energy") && pool.contains("energy"));
    }

    #[test]
    fn draw_consumes_each_concept_once() {
        let mut pool = ConceptPool::from_terms(["a", "b", "a", "c"]);
        assert_eq!(pool.len(), 3);
        let mut drawn = Vec::new();
        while let Some(c) = pool.draw() {
            drawn.push(c);
        }
        drawn.sort();
        assert_eq!(drawn, vec!["a", "b", "c"]);
        assert!(pool.is_empty());
        assert_eq!(pool.draw(), None);
    }
}
