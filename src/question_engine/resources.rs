//! Read-only linguistic resources shared by every generation run.
//!
//! [`shared()`] builds the English bundle once, on first use, and hands out
//! a `&'static` reference afterwards. Nothing in here is mutated after
//! construction, so concurrent runs can read it freely.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::question_engine::tagger::{LexiconTagger, Tagger};

/// English stop words, matched case-insensitively by the summarizer.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't", "n't", "'s",
];

static SHARED: Lazy<LinguisticResources> = Lazy::new(LinguisticResources::english);

/// Tagger plus stop-word set.
pub struct LinguisticResources {
    tagger: Box<dyn Tagger>,
    stopwords: HashSet<String>,
}

impl LinguisticResources {
    /// Built-in English tagger and stop-word list.
    pub fn english() -> Self {
        LinguisticResources {
            tagger: Box::new(LexiconTagger::english()),
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Bundle with a caller-supplied tagger and stop words (stored lower-cased).
    pub fn new<I, S>(tagger: impl Tagger + 'static, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        LinguisticResources {
            tagger: Box::new(tagger),
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn tagger(&self) -> &dyn Tagger {
        self.tagger.as_ref()
    }

    /// Case-insensitive stop-word lookup.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }
}

/// Process-wide English resources, initialised on first call.
pub fn shared() -> &'static LinguisticResources {
    &SHARED
}
