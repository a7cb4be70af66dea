//! Core question engine: segmentation, concept extraction, builders, orchestration.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: questions, categories, question set, config, request |
//! | `error`      | `QuestionGenError` and the crate `Result` alias |
//! | `segmenter`  | Sentence boundary detection → `SentenceSet` |
//! | `tagger`     | Word tokenizer and rule/lexicon part-of-speech tagger |
//! | `resources`  | Read-only tagger + stop-word bundle, shared process-wide |
//! | `concepts`   | Noun extraction into a deduplicated, drawable `ConceptPool` |
//! | `relevance`  | Literal-substring sentence lookup for a concept |
//! | `summarizer` | Frequency-weighted extractive summary for reference answers |
//! | `randomness` | `Randomness` trait (choose / shuffle / coin), implemented for every `rand::Rng` |
//! | `builders`   | One builder per category, plus a dispatcher |
//! | `generator`  | `QuestionGenerator` and the one-shot `generate_questions()` |

pub mod builders;
pub mod concepts;
pub mod error;
pub mod generator;
pub mod models;
pub mod randomness;
pub mod relevance;
pub mod resources;
pub mod segmenter;
pub mod summarizer;
pub mod tagger;

pub use error::{QuestionGenError, Result};
pub use generator::{generate_questions, QuestionGenerator};
pub use models::{
    EngineConfig, GenerationRequest, Question, QuestionCategory, QuestionSet, TrueFalseAnswer,
};
pub use randomness::Randomness;
pub use resources::LinguisticResources;
pub use segmenter::{segment, SentenceSet};
