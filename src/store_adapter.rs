use serde_json::{json, Map, Value};

use crate::question_engine::models::{Question, QuestionSet};

/// Convert one question to its stored form.
///
/// Multiple choice → `{question, options, answer}`; everything else →
/// `{question, answer}`, with true/false answers as `"True"` / `"False"`.
fn question_record(question: &Question) -> Value {
    match question {
        Question::MultipleChoice { prompt, options, correct_option, .. } => json!({
            "question": prompt,
            "options":  options,
            "answer":   correct_option,
        }),
        other => json!({
            "question": other.prompt(),
            "answer":   other.answer_text(),
        }),
    }
}

/// Category map keyed `multiple_choice`, `true_false`, `short_answer`, `essay`.
fn questions_block(set: &QuestionSet) -> Value {
    let mut block = Map::new();
    for (category, questions) in set.iter() {
        let records = questions.iter().map(question_record).collect();
        block.insert(category.key().to_string(), Value::Array(records));
    }
    Value::Object(block)
}

/// Map a `QuestionSet` to the document handed to the persistence store.
///
/// `document_id` is the upload's identifier (usually the sanitised filename).
pub fn to_store_document(document_id: &str, set: &QuestionSet) -> Value {
    json!({
        "filename":  document_id,
        "questions": questions_block(set),
    })
}

/// Map a `QuestionSet` to the upload endpoint's success body.
pub fn to_upload_response(set: &QuestionSet) -> Value {
    json!({
        "message":   "File successfully uploaded and questions generated",
        "questions": questions_block(set),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::models::TrueFalseAnswer;

    fn sample_set() -> QuestionSet {
        let mut set = QuestionSet::new();
        set.push(Question::MultipleChoice {
            concept: "water".into(),
            prompt: "What is the significance of water?".into(),
            options: vec!["A.".into(), "B water.".into(), "C.".into(), "D.".into()],
            correct_option: "B water.".into(),
        });
        set.push(Question::TrueFalse {
            concept: "Ice".into(),
            prompt: "True or False: Ice melts. (This statement is False)".into(),
            correct_answer: TrueFalseAnswer::False,
        });
        set.push(Question::Essay {
            concept: "Rivers".into(),
            prompt: "Discuss the role of Rivers?".into(),
            reference_answer: "Rivers carve valleys.".into(),
        });
        set
    }

    #[test]
    fn store_document_has_filename_and_all_categories() {
        let doc = to_store_document("notes.pdf", &sample_set());
        assert_eq!(doc["filename"], "notes.pdf");
        let questions = doc["questions"].as_object().unwrap();
        let keys: Vec<&str> = questions.keys().map(String::as_str).collect();
        for key in ["multiple_choice", "true_false", "short_answer", "essay"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert!(doc["questions"]["short_answer"].as_array().unwrap().is_empty());
    }

    #[test]
    fn multiple_choice_record_lists_options_and_answer() {
        let doc = to_store_document("notes.pdf", &sample_set());
        let mc = &doc["questions"]["multiple_choice"][0];
        assert_eq!(mc["question"], "What is the significance of water?");
        assert_eq!(mc["options"].as_array().unwrap().len(), 4);
        assert_eq!(mc["answer"], "B water.");
    }

    #[test]
    fn true_false_answer_is_text() {
        let body = to_upload_response(&sample_set());
        assert_eq!(body["questions"]["true_false"][0]["answer"], "False");
        assert_eq!(body["questions"]["essay"][0]["answer"], "Rivers carve valleys.");
        assert!(body["questions"]["essay"][0].get("options").is_none());
    }
}
