use crate::question_engine::{
    builders::BuildContext,
    error::Result,
    models::Question,
    randomness::Randomness,
    relevance::find_relevant,
    summarizer::summarize,
};

/// Essay question; same reference-answer derivation as short answer.
pub fn build<R: Randomness + ?Sized>(
    concept: &str,
    ctx: &BuildContext<'_>,
    _rng: &mut R,
) -> Result<Option<Question>> {
    let relevant = find_relevant(concept, ctx.sentences);
    if relevant.is_empty() {
        return Ok(None);
    }

    Ok(Some(Question::Essay {
        concept: concept.to_string(),
        prompt: format!("Discuss the role of {concept}?"),
        reference_answer: summarize(&relevant, ctx.resources, ctx.config.summary_terms),
    }))
}
