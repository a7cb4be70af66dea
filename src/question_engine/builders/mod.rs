//! Question builders, one per category.
//!
//! Every builder has the same shape:
//!
//! ```ignore
//! pub fn build<R: Randomness + ?Sized>(
//!     concept: &str,
//!     ctx: &BuildContext<'_>,
//!     rng: &mut R,
//! ) -> Result<Option<Question>>
//! ```
//!
//! `Ok(None)` means no sentence mentions the concept. The orchestrator
//! dispatches to these via [`build`].

pub mod essay;
pub mod multiple_choice;
pub mod short_answer;
pub mod true_false;

use crate::question_engine::{
    error::Result,
    models::{EngineConfig, Question, QuestionCategory},
    randomness::Randomness,
    resources::LinguisticResources,
    segmenter::SentenceSet,
};

/// Read-only inputs shared by all builders during one run.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    pub sentences: &'a SentenceSet,
    pub resources: &'a LinguisticResources,
    pub config: &'a EngineConfig,
}

/// Route `concept` to the builder for `category`.
pub fn build<R: Randomness + ?Sized>(
    category: QuestionCategory,
    concept: &str,
    ctx: &BuildContext<'_>,
    rng: &mut R,
) -> Result<Option<Question>> {
    match category {
        QuestionCategory::MultipleChoice => multiple_choice::build(concept, ctx, rng),
        QuestionCategory::TrueFalse      => true_false::build(concept, ctx, rng),
        QuestionCategory::ShortAnswer    => short_answer::build(concept, ctx, rng),
        QuestionCategory::Essay          => essay::build(concept, ctx, rng),
    }
}

/// Scripted randomness for exact-output builder tests.
#[cfg(test)]
pub(crate) mod scripted {
    use crate::question_engine::randomness::Randomness;

    /// Replays `picks` (each taken modulo the requested bound), then repeats the last.
    /// Shuffles are no-ops so option order is insertion order.
    pub struct Scripted {
        picks: Vec<usize>,
        cursor: usize,
        pub coin: bool,
    }

    impl Scripted {
        pub fn new(picks: &[usize], coin: bool) -> Self {
            Scripted { picks: picks.to_vec(), cursor: 0, coin }
        }
    }

    impl Randomness for Scripted {
        fn below(&mut self, upper: usize) -> usize {
            let pick = self
                .picks
                .get(self.cursor)
                .or(self.picks.last())
                .copied()
                .unwrap_or(0);
            self.cursor += 1;
            pick % upper
        }

        fn coin_flip(&mut self) -> bool {
            self.coin
        }

        fn shuffle<T>(&mut self, _items: &mut [T]) {}
    }
}
