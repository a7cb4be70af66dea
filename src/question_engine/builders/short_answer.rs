use crate::question_engine::{
    builders::BuildContext,
    error::Result,
    models::Question,
    randomness::Randomness,
    relevance::find_relevant,
    summarizer::summarize,
};

/// Short-answer question; the reference answer summarises every relevant sentence.
pub fn build<R: Randomness + ?Sized>(
    concept: &str,
    ctx: &BuildContext<'_>,
    _rng: &mut R,
) -> Result<Option<Question>> {
    let relevant = find_relevant(concept, ctx.sentences);
    if relevant.is_empty() {
        return Ok(None);
    }
    let reference_answer = summarize(&relevant, ctx.resources, ctx.config.summary_terms);

    Ok(Some(Question::ShortAnswer {
        concept: concept.to_string(),
        prompt: format!("Describe the importance of {concept}?"),
        reference_answer,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::{models::EngineConfig, resources, segmenter::segment};
    use rand::{rngs::StdRng, SeedableRng};

    const CELL_TEXT: &str = "The mitochondria is the powerhouse of the cell. \
                             Cells require energy to function. \
                             Energy production occurs in the mitochondria.";

    #[test]
    fn mitochondria_answer_uses_only_matching_sentences() {
        let sentences = segment(CELL_TEXT);
        let config = EngineConfig::default();
        let ctx = BuildContext { sentences: &sentences, resources: resources::shared(), config: &config };
        let q = build("mitochondria", &ctx, &mut StdRng::seed_from_u64(1)).unwrap().unwrap();
        assert_eq!(q.prompt(), "Describe the importance of mitochondria?");
        let answer = q.answer_text();
        assert!(!answer.is_empty());
        assert!(!answer.contains("Cells require energy"));
        assert_eq!(
            answer,
            "The mitochondria is the powerhouse of the cell. Energy production occurs in the mitochondria."
        );
    }

    #[test]
    fn absent_without_relevant_sentence() {
        let sentences = segment(CELL_TEXT);
        let config = EngineConfig::default();
        let ctx = BuildContext { sentences: &sentences, resources: resources::shared(), config: &config };
        assert!(build("nucleus", &ctx, &mut StdRng::seed_from_u64(1)).unwrap().is_none());
    }
}
