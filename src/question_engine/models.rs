use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::question_engine::error::{QuestionGenError, Result};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The four fixed question categories, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
}

impl QuestionCategory {
    /// Canonical order: the orchestrator fills categories in exactly this order.
    pub const ALL: [QuestionCategory; 4] = [
        QuestionCategory::MultipleChoice,
        QuestionCategory::TrueFalse,
        QuestionCategory::ShortAnswer,
        QuestionCategory::Essay,
    ];

    /// Key used in stored documents (`"multiple_choice"`, `"true_false"`, ...).
    pub fn key(self) -> &'static str {
        match self {
            QuestionCategory::MultipleChoice => "multiple_choice",
            QuestionCategory::TrueFalse      => "true_false",
            QuestionCategory::ShortAnswer    => "short_answer",
            QuestionCategory::Essay          => "essay",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionCategory::MultipleChoice => "Multiple Choice",
            QuestionCategory::TrueFalse      => "True/False",
            QuestionCategory::ShortAnswer    => "Short Answer",
            QuestionCategory::Essay          => "Essay",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrueFalseAnswer {
    True,
    False,
}

impl fmt::Display for TrueFalseAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrueFalseAnswer::True  => write!(f, "True"),
            TrueFalseAnswer::False => write!(f, "False"),
        }
    }
}

/// One generated question. `concept` records the term that seeded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice {
        concept: String,
        prompt: String,
        /// Four distinct sentences in display order; `correct_option` is one of them.
        options: Vec<String>,
        correct_option: String,
    },
    TrueFalse {
        concept: String,
        prompt: String,
        correct_answer: TrueFalseAnswer,
    },
    ShortAnswer {
        concept: String,
        prompt: String,
        reference_answer: String,
    },
    Essay {
        concept: String,
        prompt: String,
        reference_answer: String,
    },
}

impl Question {
    pub fn category(&self) -> QuestionCategory {
        match self {
            Question::MultipleChoice { .. } => QuestionCategory::MultipleChoice,
            Question::TrueFalse { .. }      => QuestionCategory::TrueFalse,
            Question::ShortAnswer { .. }    => QuestionCategory::ShortAnswer,
            Question::Essay { .. }          => QuestionCategory::Essay,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice { prompt, .. }
            | Question::TrueFalse { prompt, .. }
            | Question::ShortAnswer { prompt, .. }
            | Question::Essay { prompt, .. } => prompt,
        }
    }

    pub fn concept(&self) -> &str {
        match self {
            Question::MultipleChoice { concept, .. }
            | Question::TrueFalse { concept, .. }
            | Question::ShortAnswer { concept, .. }
            | Question::Essay { concept, .. } => concept,
        }
    }

    /// The answer as display text (correct option, True/False, or reference answer).
    pub fn answer_text(&self) -> String {
        match self {
            Question::MultipleChoice { correct_option, .. } => correct_option.clone(),
            Question::TrueFalse { correct_answer, .. }      => correct_answer.to_string(),
            Question::ShortAnswer { reference_answer, .. }
            | Question::Essay { reference_answer, .. }      => reference_answer.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Question set
// ---------------------------------------------------------------------------

/// Categorised output of one generation run.
///
/// All four categories are always present (possibly empty) and iterate in
/// [`QuestionCategory::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    categories: IndexMap<QuestionCategory, Vec<Question>>,
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionSet {
    pub fn new() -> Self {
        let categories = QuestionCategory::ALL
            .iter()
            .map(|&c| (c, Vec::new()))
            .collect();
        QuestionSet { categories }
    }

    /// Append a question under its own category.
    pub fn push(&mut self, question: Question) {
        self.categories
            .entry(question.category())
            .or_default()
            .push(question);
    }

    pub fn get(&self, category: QuestionCategory) -> &[Question] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count(&self, category: QuestionCategory) -> usize {
        self.get(category).len()
    }

    /// Total questions across all categories.
    pub fn total(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionCategory, &[Question])> {
        self.categories.iter().map(|(&c, qs)| (c, qs.as_slice()))
    }

    /// Every question in category order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories.values().flatten()
    }
}

// ---------------------------------------------------------------------------
// Configuration / request
// ---------------------------------------------------------------------------

/// Tunables for one engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on questions per category.
    pub questions_per_category: usize,
    /// How many top-frequency terms the summarizer keeps.
    pub summary_terms: usize,
    /// Incorrect options per multiple-choice question.
    pub distractor_count: usize,
    /// Random draws allowed while collecting distractors before giving up.
    pub max_distractor_draws: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            questions_per_category: 5,
            summary_terms: 5,
            distractor_count: 3,
            max_distractor_draws: 256,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.distractor_count == 0 {
            return Err(QuestionGenError::InvalidConfig(
                "distractor_count must be at least 1".to_string(),
            ));
        }
        if self.summary_terms == 0 {
            return Err(QuestionGenError::InvalidConfig(
                "summary_terms must be at least 1".to_string(),
            ));
        }
        if self.max_distractor_draws < self.distractor_count {
            return Err(QuestionGenError::InvalidConfig(format!(
                "max_distractor_draws ({}) is below distractor_count ({})",
                self.max_distractor_draws, self.distractor_count
            )));
        }
        Ok(())
    }

    /// Options shown per multiple-choice question (correct + distractors).
    pub fn option_count(&self) -> usize {
        self.distractor_count + 1
    }
}

/// Input to [`generate_questions`](crate::question_engine::generate_questions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Plain text extracted from the uploaded document.
    pub text: String,
    /// `Some(seed)` reproduces the exact same question set every time.
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub config: EngineConfig,
}

impl GenerationRequest {
    /// Entropy-seeded request with the default config.
    pub fn new(text: impl Into<String>) -> Self {
        GenerationRequest {
            text: text.into(),
            rng_seed: None,
            config: EngineConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(concept: &str) -> Question {
        Question::TrueFalse {
            concept: concept.to_string(),
            prompt: format!("True or False: {concept} exists."),
            correct_answer: TrueFalseAnswer::True,
        }
    }

    #[test]
    fn new_set_has_all_categories_in_order() {
        let set = QuestionSet::new();
        let order: Vec<QuestionCategory> = set.iter().map(|(c, _)| c).collect();
        assert_eq!(order, QuestionCategory::ALL.to_vec());
        assert!(set.is_empty());
    }

    #[test]
    fn push_files_question_under_its_category() {
        let mut set = QuestionSet::new();
        set.push(tf("cell"));
        assert_eq!(set.count(QuestionCategory::TrueFalse), 1);
        assert_eq!(set.count(QuestionCategory::Essay), 0);
        assert_eq!(set.total(), 1);
    }

    #[test]
    fn set_serializes_as_category_map() {
        let mut set = QuestionSet::new();
        set.push(tf("cell"));
        let v = serde_json::to_value(&set).unwrap();
        assert_eq!(v["true_false"][0]["type"], "true_false");
        assert_eq!(v["true_false"][0]["correct_answer"], "True");
        assert!(v["essay"].as_array().unwrap().is_empty());
    }

    #[test]
    fn config_json_fills_defaults() {
        let cfg = EngineConfig::from_json_str(r#"{ "questions_per_category": 2 }"#).unwrap();
        assert_eq!(cfg.questions_per_category, 2);
        assert_eq!(cfg.summary_terms, 5);
        assert_eq!(cfg.option_count(), 4);
    }

    #[test]
    fn config_rejects_zero_distractors() {
        let err = EngineConfig::from_json_str(r#"{ "distractor_count": 0 }"#).unwrap_err();
        assert!(matches!(err, QuestionGenError::InvalidConfig(_)));
    }

    #[test]
    fn config_rejects_malformed_json() {
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, QuestionGenError::ConfigParse(_)));
        assert!(err.is_client_error());
    }
}
