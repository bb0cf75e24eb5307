//! Interprets raw model output as typed analysis results.
//!
//! Models often wrap JSON in a markdown code fence. The fence is removed,
//! then the remainder must parse strictly; anything else comes back as
//! [`Interpretation::Unparsed`] carrying the cleaned text. JSON buried inside
//! narrative text is deliberately not extracted.

use serde::de::DeserializeOwned;

use super::types::{SentenceAnalysisResult, WordAnalysisResult};

const FENCE: &str = "```";

/// Outcome of interpreting model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation<T> {
    /// The text parsed into the expected shape.
    Parsed(T),
    /// The text did not parse; holds the fence-stripped text.
    Unparsed(String),
}

/// Remove a leading fence (with optional language tag), a trailing fence,
/// and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix(FENCE) {
        body = match rest.split_once('\n') {
            // First line is only a language tag such as `json`
            Some((tag, remainder)) if is_language_tag(tag) => remainder,
            // Tag and content share the opening line
            _ => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }

    if let Some(rest) = body.trim_end().strip_suffix(FENCE) {
        body = rest;
    }

    body.trim()
}

fn is_language_tag(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn interpret<T: DeserializeOwned>(raw: &str) -> Interpretation<T> {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<T>(cleaned) {
        Ok(value) => Interpretation::Parsed(value),
        Err(e) => {
            tracing::debug!(error = %e, "Model output did not match the expected shape");
            Interpretation::Unparsed(cleaned.to_string())
        }
    }
}

/// Interpret model output as a sentence analysis.
pub fn interpret_sentence(raw: &str) -> Interpretation<SentenceAnalysisResult> {
    interpret(raw)
}

/// Interpret model output as a word analysis.
pub fn interpret_word(raw: &str) -> Interpretation<WordAnalysisResult> {
    interpret(raw)
}
