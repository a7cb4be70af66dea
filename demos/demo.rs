//! End-to-end demo: text in, printable question set and store document out.
//!
//! Run with: `cargo run --example demo [-- path/to/text.txt [seed]]`
//!
//! Without a path a short built-in biology passage is used. Set
//! `RUST_LOG=exam_question_gen=debug` to watch concepts being skipped.
//!
//! ## Key concepts demonstrated
//!
//! - `GenerationRequest::new(text)` — defaults: entropy seed, five questions
//!   per category.
//! - `.with_seed(u64)` makes the output fully deterministic.
//! - `render_text` produces the printable layout; `to_store_document` produces
//!   the JSON record a persistence layer would keep per upload.
//! - An empty document is a client error (`QuestionGenError::is_client_error`).

use std::{env, fs, process};

use exam_question_gen::{
    generate_questions, render_text, to_store_document, GenerationRequest, QuestionCategory,
    RenderOptions,
};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "The mitochondria is the powerhouse of the cell. \
    Cells require energy to function. \
    Energy production occurs in the mitochondria. \
    The nucleus stores genetic information. \
    Ribosomes build proteins from amino acids. \
    The cell membrane controls what enters the cell. \
    Photosynthesis happens in the chloroplasts of plant cells. \
    Chloroplasts contain chlorophyll, a green pigment.";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (document_id, text) = match args.first() {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => (path.clone(), text),
            Err(e) => {
                eprintln!("cannot read {path}: {e}");
                process::exit(2);
            }
        },
        None => ("sample.txt".to_string(), SAMPLE.to_string()),
    };
    let seed = args.get(1).and_then(|s| s.parse::<u64>().ok()).unwrap_or(42);

    let set = match generate_questions(GenerationRequest::new(text).with_seed(seed)) {
        Ok(set) => set,
        Err(e) => {
            let status = if e.is_client_error() { 400 } else { 500 };
            eprintln!("[{status}] {e}");
            process::exit(1);
        }
    };

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Document: {document_id}  Seed: {seed}");
    for category in QuestionCategory::ALL {
        println!("  {:<16} {}", category.to_string(), set.count(category));
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    print!("{}", render_text(&set, RenderOptions::default()));

    println!("── store document ──");
    match serde_json::to_string_pretty(&to_store_document(&document_id, &set)) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("cannot serialise store document: {e}"),
    }
}
