//! # exam_question_gen
//!
//! An offline, heuristic exam-question generator for plain text.
//!
//! Feed it the text extracted from a document and it returns up to five
//! questions in each of four categories: multiple choice, true/false, short
//! answer and essay. No model or network access is involved; everything is
//! sentence segmentation, rule-based noun tagging, substring lookup and word
//! frequencies.
//!
//! ## How it works
//!
//! 1. The text is split into sentences.
//! 2. Nouns and proper nouns are pulled out as *concepts* and shuffled into a
//!    pool.
//! 3. Each category in turn draws concepts from the pool. A concept is used at
//!    most once per run, even when it fails to produce a question.
//! 4. Builders turn a concept plus the sentences that mention it into a
//!    question:
//!    - multiple choice: a mentioning sentence is the answer, three other
//!      sentences are the distractors;
//!    - true/false: a mentioning sentence, labelled False on a coin flip;
//!    - short answer / essay: a frequency-based summary of every mentioning
//!      sentence is the reference answer.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce a run exactly.
//! - **Never loops**: multiple-choice distractor collection is bounded and
//!   skips the concept when the document has too few distinct sentences.
//! - **Pluggable**: any [`Randomness`] source and any
//!   [`Tagger`](question_engine::tagger::Tagger) can be injected.
//!
//! ## Quick start
//!
//! ```rust
//! use exam_question_gen::{generate_questions, GenerationRequest, QuestionCategory};
//!
//! let text = "The mitochondria is the powerhouse of the cell. \
//!             Cells require energy to function. \
//!             Energy production occurs in the mitochondria.";
//!
//! let set = generate_questions(GenerationRequest::new(text).with_seed(42))?;
//! for question in set.get(QuestionCategory::ShortAnswer) {
//!     println!("Q: {}", question.prompt());
//!     println!("A: {}", question.answer_text());
//! }
//! # Ok::<(), exam_question_gen::QuestionGenError>(())
//! ```

pub mod question_engine;
pub mod render;
pub mod store_adapter;

// Convenience re-exports so callers can use `exam_question_gen::generate_questions`
// directly without reaching into `question_engine::`.
pub use question_engine::{
    generate_questions, EngineConfig, GenerationRequest, LinguisticResources, Question,
    QuestionCategory, QuestionGenError, QuestionGenerator, QuestionSet, Randomness,
    TrueFalseAnswer,
};
pub use render::{render_text, RenderOptions};
pub use store_adapter::{to_store_document, to_upload_response};
