use std::collections::HashSet;

use crate::question_engine::{
    builders::BuildContext,
    error::{QuestionGenError, Result},
    models::Question,
    randomness::Randomness,
    relevance::find_relevant,
};

/// Multiple-choice question: the correct option is a relevant sentence picked
/// uniformly at random; distractors are other sentences drawn from the whole
/// document.
///
/// Fails with [`QuestionGenError::DistractorExhaustion`] when the document has
/// too few distinct sentences, or when the draw budget runs out first.
pub fn build<R: Randomness + ?Sized>(
    concept: &str,
    ctx: &BuildContext<'_>,
    rng: &mut R,
) -> Result<Option<Question>> {
    let relevant = find_relevant(concept, ctx.sentences);
    let Some(&correct) = rng.choose(relevant.as_slice()) else {
        return Ok(None);
    };

    let required = ctx.config.option_count();
    let distinct: HashSet<&str> = ctx.sentences.iter().collect();
    if distinct.len() < required {
        return Err(QuestionGenError::DistractorExhaustion {
            available: distinct.len(),
            required,
        });
    }

    let mut options = vec![correct.to_string()];
    let mut draws = 0;
    while options.len() < required {
        if draws >= ctx.config.max_distractor_draws {
            return Err(QuestionGenError::DistractorExhaustion {
                available: distinct.len(),
                required,
            });
        }
        draws += 1;
        let Some(candidate) = rng.choose(ctx.sentences.as_slice()) else {
            break;
        };
        if !options.contains(candidate) {
            options.push(candidate.clone());
        }
    }
    rng.shuffle(&mut options);

    Ok(Some(Question::MultipleChoice {
        concept: concept.to_string(),
        prompt: format!("What is the significance of {concept}?"),
        options,
        correct_option: correct.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::{
        builders::scripted::Scripted,
        models::EngineConfig,
        resources,
        segmenter::{segment, SentenceSet},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn ctx<'a>(sentences: &'a SentenceSet, config: &'a EngineConfig) -> BuildContext<'a> {
        BuildContext { sentences, resources: resources::shared(), config }
    }

    const TEXT: &str = "Plants need light. Roots absorb water. Leaves make sugar. \
                        Stems carry water. Flowers attract bees.";

    #[test]
    fn builds_four_distinct_options_with_correct_member() {
        let sentences = segment(TEXT);
        let config = EngineConfig::default();
        for seed in [1u64, 2, 3, 42, 999] {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = build("water", &ctx(&sentences, &config), &mut rng).unwrap().unwrap();
            let Question::MultipleChoice { prompt, options, correct_option, concept } = q else {
                panic!("wrong variant");
            };
            assert_eq!(concept, "water");
            assert_eq!(prompt, "What is the significance of water?");
            assert_eq!(options.len(), 4);
            let unique: HashSet<&String> = options.iter().collect();
            assert_eq!(unique.len(), 4, "options not distinct: {options:?}");
            assert!(options.contains(&correct_option));
            assert!(correct_option.contains("water"));
        }
    }

    #[test]
    fn scripted_picks_give_exact_options() {
        let sentences = segment(TEXT);
        let config = EngineConfig::default();
        // correct: relevant[1] = "Stems carry water."; draws: 3 (dup), 0, 1, 4
        let mut rng = Scripted::new(&[1, 3, 0, 1, 4], true);
        let q = build("water", &ctx(&sentences, &config), &mut rng).unwrap().unwrap();
        let Question::MultipleChoice { options, correct_option, .. } = q else {
            panic!("wrong variant");
        };
        assert_eq!(correct_option, "Stems carry water.");
        assert_eq!(
            options,
            vec!["Stems carry water.", "Plants need light.", "Roots absorb water.", "Flowers attract bees."]
        );
    }

    #[test]
    fn absent_when_concept_not_in_text() {
        let sentences = segment(TEXT);
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(build("granite", &ctx(&sentences, &config), &mut rng).unwrap().is_none());
    }

    #[test]
    fn single_sentence_exhausts_distractors() {
        let sentences = segment("Water boils at 100 degrees.");
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let err = build("Water", &ctx(&sentences, &config), &mut rng).unwrap_err();
        assert!(matches!(err, QuestionGenError::DistractorExhaustion { available: 1, required: 4 }));
    }

    #[test]
    fn repeated_sentences_do_not_count_as_distinct() {
        let sentences = SentenceSet::from(vec![
            "Ice melts.".to_string(),
            "Ice melts.".to_string(),
            "Ice melts.".to_string(),
            "Snow falls.".to_string(),
        ]);
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let err = build("Ice", &ctx(&sentences, &config), &mut rng).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn draw_budget_is_enforced() {
        let sentences = segment(TEXT);
        let config = EngineConfig { max_distractor_draws: 3, ..EngineConfig::default() };
        // Every draw lands on the correct answer, so no distractor is ever collected.
        let mut rng = Scripted::new(&[3], true);
        let err = build("water", &ctx(&sentences, &config), &mut rng).unwrap_err();
        // Five distinct sentences exist; the budget ran out, not the document.
        assert!(matches!(err, QuestionGenError::DistractorExhaustion { available: 5, required: 4 }));
    }
}
