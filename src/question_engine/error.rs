//! Engine error types.
//!
//! Only [`QuestionGenError::EmptyInput`] and config errors end a run. A
//! concept that cannot support a question is not an error at all (builders
//! return `Ok(None)`), and distractor exhaustion is recoverable: the
//! orchestrator skips the concept and moves on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionGenError {
    /// Segmentation produced zero sentences.
    #[error("input text contains no sentences")]
    EmptyInput,

    /// Could not collect `required` distinct multiple-choice options from the
    /// `available` distinct sentences of the document.
    #[error("could not fill {required} multiple-choice options from {available} distinct sentences")]
    DistractorExhaustion { available: usize, required: usize },

    /// Configuration values are inconsistent.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("failed to parse engine config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl QuestionGenError {
    /// Returns `true` if the orchestrator should skip the concept and continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuestionGenError::DistractorExhaustion { .. })
    }

    /// Returns `true` if the failure stems from caller input (maps to a 4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            QuestionGenError::EmptyInput
                | QuestionGenError::InvalidConfig(_)
                | QuestionGenError::ConfigParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuestionGenError>;
