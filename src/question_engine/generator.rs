use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::question_engine::{
    builders::{self, BuildContext},
    concepts::extract_concepts,
    error::{QuestionGenError, Result},
    models::{EngineConfig, GenerationRequest, QuestionCategory, QuestionSet},
    randomness::Randomness,
    resources::{self, LinguisticResources},
    segmenter::segment,
};

/// Drives the builders over one document.
///
/// Holds only shared, read-only state; each [`generate`](Self::generate) call
/// owns its sentences and concept pool for the duration of the run.
pub struct QuestionGenerator<'r> {
    resources: &'r LinguisticResources,
    config: EngineConfig,
}

impl QuestionGenerator<'static> {
    /// Generator over the process-wide English resources.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_resources(resources::shared(), config)
    }
}

impl<'r> QuestionGenerator<'r> {
    pub fn with_resources(resources: &'r LinguisticResources, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(QuestionGenerator { resources, config })
    }

    /// Build a question set from `text`.
    ///
    /// Categories are filled in [`QuestionCategory::ALL`] order from a single
    /// concept pool. Every drawn concept is consumed whether or not it yields
    /// a question, so a category can end up short when the pool runs dry.
    pub fn generate<R: Randomness + ?Sized>(&self, text: &str, rng: &mut R) -> Result<QuestionSet> {
        let sentences = segment(text);
        if sentences.is_empty() {
            return Err(QuestionGenError::EmptyInput);
        }

        let mut pool = extract_concepts(&sentences, self.resources.tagger());
        let concept_count = pool.len();
        pool.shuffle(rng);

        let ctx = BuildContext {
            sentences: &sentences,
            resources: self.resources,
            config: &self.config,
        };
        let quota = self.config.questions_per_category;
        let mut set = QuestionSet::new();

        for category in QuestionCategory::ALL {
            while set.count(category) < quota {
                let Some(concept) = pool.draw() else {
                    break;
                };
                match builders::build(category, &concept, &ctx, rng) {
                    Ok(Some(question)) => set.push(question),
                    Ok(None) => {
                        debug!(%category, concept = %concept, "no relevant sentence, skipping concept");
                    }
                    Err(e) if e.is_recoverable() => {
                        debug!(%category, concept = %concept, error = %e, "skipping concept");
                    }
                    Err(e) => return Err(e),
                }
            }
            if set.count(category) < quota {
                warn!(
                    %category,
                    produced = set.count(category),
                    quota,
                    "concept pool exhausted before quota was met"
                );
            }
        }

        info!(
            sentences = sentences.len(),
            concepts = concept_count,
            multiple_choice = set.count(QuestionCategory::MultipleChoice),
            true_false = set.count(QuestionCategory::TrueFalse),
            short_answer = set.count(QuestionCategory::ShortAnswer),
            essay = set.count(QuestionCategory::Essay),
            "question set generated"
        );
        Ok(set)
    }
}

/// One-shot entry point: seeded `StdRng` when `rng_seed` is set, entropy otherwise.
pub fn generate_questions(request: GenerationRequest) -> Result<QuestionSet> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    QuestionGenerator::new(request.config)?.generate(&request.text, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::{
        models::Question,
        tagger::{PosTag, Tagger},
    };

    struct NoNouns;

    impl Tagger for NoNouns {
        fn tag(&self, tokens: &[&str]) -> Vec<PosTag> {
            vec![PosTag::VB; tokens.len()]
        }
    }

    #[test]
    fn blank_text_is_empty_input() {
        let gen = QuestionGenerator::new(EngineConfig::default()).unwrap();
        let err = gen.generate("  \n ", &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, QuestionGenError::EmptyInput));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = EngineConfig { summary_terms: 0, ..EngineConfig::default() };
        assert!(matches!(
            QuestionGenerator::new(config),
            Err(QuestionGenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn no_concepts_means_empty_set_not_error() {
        let res = LinguisticResources::new(NoNouns, Vec::<String>::new());
        let gen = QuestionGenerator::with_resources(&res, EngineConfig::default()).unwrap();
        let set = gen.generate("Cats sleep. Dogs bark.", &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 4);
    }

    #[test]
    fn single_sentence_skips_multiple_choice() {
        let gen = QuestionGenerator::new(EngineConfig::default()).unwrap();
        let set = gen
            .generate("Water boils at 100 degrees.", &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(set.count(QuestionCategory::MultipleChoice), 0);
        // "Water" and "degrees" are both consumed by the failed multiple-choice attempts.
        assert_eq!(set.total(), 0);
    }

    #[test]
    fn quota_is_respected() {
        let config = EngineConfig { questions_per_category: 1, ..EngineConfig::default() };
        let gen = QuestionGenerator::new(config).unwrap();
        let text = "Plants need light. Roots absorb water. Leaves make sugar. \
                    Stems carry water. Flowers attract bees. Bees make honey.";
        let set = gen.generate(text, &mut StdRng::seed_from_u64(11)).unwrap();
        for (_, questions) in set.iter() {
            assert!(questions.len() <= 1);
        }
        assert!(set.questions().all(|q| !matches!(q, Question::MultipleChoice { options, .. } if options.len() != 4)));
    }

    #[test]
    fn request_seed_reproduces_set() {
        let text = "Plants need light. Roots absorb water. Leaves make sugar. Stems carry water.";
        let a = generate_questions(GenerationRequest::new(text).with_seed(77)).unwrap();
        let b = generate_questions(GenerationRequest::new(text).with_seed(77)).unwrap();
        assert_eq!(a, b);
    }
}
