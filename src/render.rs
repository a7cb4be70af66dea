//! Plain-text rendering of a question set for printing.
//!
//! Questions are grouped under a heading per category and numbered within
//! it. A form feed (`\x0C`) separates pages once `questions_per_page`
//! questions have been written.

use std::fmt::Write as _;

use crate::question_engine::models::{Question, QuestionSet};

const OPTION_LABELS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const PAGE_BREAK: char = '\x0C';

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// `0` disables page breaks.
    pub questions_per_page: usize,
    pub include_answers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { questions_per_page: 10, include_answers: true }
    }
}

fn render_question(out: &mut String, number: usize, question: &Question, opts: RenderOptions) {
    let _ = writeln!(out, "{number}. {}", question.prompt());
    if let Question::MultipleChoice { options, .. } = question {
        for (label, option) in OPTION_LABELS.iter().zip(options) {
            let _ = writeln!(out, "   {label}) {option}");
        }
    }
    if opts.include_answers {
        let _ = writeln!(out, "   Answer: {}", question.answer_text());
    }
    out.push('\n');
}

/// Render `set` as printable text. Empty categories are omitted.
pub fn render_text(set: &QuestionSet, opts: RenderOptions) -> String {
    let mut out = String::new();
    let mut on_page = 0usize;

    for (category, questions) in set.iter() {
        if questions.is_empty() {
            continue;
        }
        let _ = writeln!(out, "== {category} ==\n");
        for (i, question) in questions.iter().enumerate() {
            if opts.questions_per_page > 0 && on_page == opts.questions_per_page {
                out.push(PAGE_BREAK);
                out.push('\n');
                on_page = 0;
            }
            render_question(&mut out, i + 1, question, opts);
            on_page += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::models::TrueFalseAnswer;

    fn tf(n: usize) -> Question {
        Question::TrueFalse {
            concept: format!("c{n}"),
            prompt: format!("True or False: Statement {n}."),
            correct_answer: TrueFalseAnswer::True,
        }
    }

    #[test]
    fn groups_by_category_and_letters_options() {
        let mut set = QuestionSet::new();
        set.push(Question::MultipleChoice {
            concept: "x".into(),
            prompt: "What is the significance of x?".into(),
            options: vec!["One.".into(), "Two.".into(), "Three.".into(), "Four.".into()],
            correct_option: "Two.".into(),
        });
        set.push(tf(1));
        let text = render_text(&set, RenderOptions::default());
        assert!(text.starts_with("== Multiple Choice ==\n\n1. What is the significance of x?\n   A) One.\n"));
        assert!(text.contains("   D) Four.\n   Answer: Two.\n"));
        assert!(text.contains("== True/False ==\n\n1. True or False: Statement 1.\n   Answer: True\n"));
        assert!(!text.contains("Essay"));
    }

    #[test]
    fn page_breaks_after_limit() {
        let mut set = QuestionSet::new();
        for n in 0..5 {
            set.push(tf(n));
        }
        let text = render_text(&set, RenderOptions { questions_per_page: 2, include_answers: false });
        assert_eq!(text.matches(PAGE_BREAK).count(), 2);
        assert!(!text.contains("Answer:"));
    }

    #[test]
    fn empty_set_renders_nothing() {
        assert!(render_text(&QuestionSet::new(), RenderOptions::default()).is_empty());
    }
}
