//! Pronunciation analysis pipeline.
//!
//! - `types`: request/result records and the deterministic fallbacks
//! - `prompt`: model prompts
//! - `interpreter`: raw model text → typed result
//! - `orchestrator`: the end-to-end request lifecycle

pub mod interpreter;
pub mod orchestrator;
pub mod prompt;
pub mod types;

pub use interpreter::{interpret_sentence, interpret_word, strip_code_fences, Interpretation};
pub use orchestrator::AnalysisOrchestrator;
pub use types::{
    normalize, IncorrectWord, SentenceAnalysisRequest, SentenceAnalysisResult,
    WordAnalysisRequest, WordAnalysisResult,
};
