use crate::question_engine::{
    builders::BuildContext,
    error::Result,
    models::{Question, TrueFalseAnswer},
    randomness::Randomness,
    relevance::find_relevant,
};

/// Marker appended to prompts whose expected answer is False.
pub const FALSE_MARKER: &str = "(This statement is False)";

/// True/false question over one relevant sentence.
///
/// A coin flip decides the expected answer. On False the sentence itself is
/// left untouched; only the appended marker carries the falsity.
pub fn build<R: Randomness + ?Sized>(
    concept: &str,
    ctx: &BuildContext<'_>,
    rng: &mut R,
) -> Result<Option<Question>> {
    let relevant = find_relevant(concept, ctx.sentences);
    let Some(&sentence) = rng.choose(relevant.as_slice()) else {
        return Ok(None);
    };

    let (prompt, correct_answer) = if rng.coin_flip() {
        (format!("True or False: {sentence}"), TrueFalseAnswer::True)
    } else {
        (
            format!("True or False: {sentence} {FALSE_MARKER}"),
            TrueFalseAnswer::False,
        )
    };

    Ok(Some(Question::TrueFalse {
        concept: concept.to_string(),
        prompt,
        correct_answer,
    }))
}
