//! Request and result types for pronunciation analysis.

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of mispronounced words reported per sentence.
pub const MAX_INCORRECT_WORDS: usize = 3;

/// Score used by every sentence fallback.
pub const FALLBACK_SCORE: u8 = 70;

/// Word confidence when the offline comparison matches.
pub const OFFLINE_MATCH_CONFIDENCE: u8 = 100;

/// Word confidence when the comparison after a model failure matches.
pub const DEGRADED_MATCH_CONFIDENCE: u8 = 90;

/// Word confidence whenever the comparison does not match.
pub const MISMATCH_CONFIDENCE: u8 = 60;

pub(crate) const OFFLINE_FEEDBACK: &str =
    "Modo offline: sua frase foi recebida, mas a análise detalhada não está disponível agora.";
pub(crate) const OFFLINE_SUGGESTION: &str =
    "Tente novamente mais tarde para receber uma análise completa.";
pub(crate) const MODEL_LIMIT_FEEDBACK: &str =
    "Limite do modelo atingido no momento, mas sua frase foi recebida!";
pub(crate) const MODEL_LIMIT_SUGGESTION: &str = "Aguarde alguns instantes e tente novamente.";
pub(crate) const KEEP_PRACTICING_SUGGESTION: &str = "Continue praticando!";
pub(crate) const WORD_MATCH_FEEDBACK: &str = "Perfeito! Você pronunciou a palavra corretamente.";
pub(crate) const WORD_MISMATCH_FEEDBACK: &str = "Quase lá! Ouça a pronúncia e tente novamente.";

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /api/analyze-pronunciation`.
///
/// Fields are optional at the wire level so a missing field is reported as a
/// validation failure rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceAnalysisRequest {
    pub original_text: Option<String>,
    pub transcribed_text: Option<String>,
}

impl SentenceAnalysisRequest {
    pub fn new(original_text: impl Into<String>, transcribed_text: impl Into<String>) -> Self {
        Self {
            original_text: Some(original_text.into()),
            transcribed_text: Some(transcribed_text.into()),
        }
    }
}

/// Body of `POST /api/analyze-word-pronunciation`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysisRequest {
    pub expected_word: Option<String>,
    pub spoken_word: Option<String>,
}

impl WordAnalysisRequest {
    pub fn new(expected_word: impl Into<String>, spoken_word: impl Into<String>) -> Self {
        Self {
            expected_word: Some(expected_word.into()),
            spoken_word: Some(spoken_word.into()),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// One mispronounced word with a short tip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorrectWord {
    pub word: String,
    pub user_pronounced: String,
    pub tip: String,
}

/// Sentence-level analysis. Every field is populated on every path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceAnalysisResult {
    #[serde(deserialize_with = "percentage")]
    pub score: u8,
    #[serde(deserialize_with = "at_most_three")]
    pub incorrect_words: Vec<IncorrectWord>,
    pub feedback: String,
    pub suggestions: String,
}

impl SentenceAnalysisResult {
    fn fallback(feedback: impl Into<String>, suggestions: &str) -> Self {
        Self {
            score: FALLBACK_SCORE,
            incorrect_words: Vec::new(),
            feedback: feedback.into(),
            suggestions: suggestions.to_string(),
        }
    }

    /// Result when no model is configured.
    pub fn offline() -> Self {
        Self::fallback(OFFLINE_FEEDBACK, OFFLINE_SUGGESTION)
    }

    /// Result when the model call itself failed.
    pub fn model_failure() -> Self {
        Self::fallback(MODEL_LIMIT_FEEDBACK, MODEL_LIMIT_SUGGESTION)
    }

    /// Result when the model answered with text that is not the expected JSON.
    pub fn unparsed(text: impl Into<String>) -> Self {
        Self::fallback(text, KEEP_PRACTICING_SUGGESTION)
    }
}

/// Word-level analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysisResult {
    pub is_correct: bool,
    #[serde(deserialize_with = "percentage")]
    pub confidence: u8,
    pub feedback: String,
}

impl WordAnalysisResult {
    /// Deterministic comparison used whenever the model is not consulted.
    ///
    /// `match_confidence` is reported when the words match; a mismatch always
    /// reports [`MISMATCH_CONFIDENCE`].
    pub fn compare(expected: &str, spoken: &str, match_confidence: u8) -> Self {
        if normalize(expected) == normalize(spoken) {
            Self {
                is_correct: true,
                confidence: match_confidence,
                feedback: WORD_MATCH_FEEDBACK.to_string(),
            }
        } else {
            Self {
                is_correct: false,
                confidence: MISMATCH_CONFIDENCE,
                feedback: WORD_MISMATCH_FEEDBACK.to_string(),
            }
        }
    }
}

/// Trim surrounding whitespace and case-fold.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

// ============================================================================
// Deserialization helpers
// ============================================================================

/// Accept any finite JSON number and fit it into 0..=100.
fn percentage<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("percentage must be a finite number"));
    }
    Ok(value.round().clamp(0.0, 100.0) as u8)
}

fn at_most_three<'de, D>(deserializer: D) -> Result<Vec<IncorrectWord>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut words = Vec::<IncorrectWord>::deserialize(deserializer)?;
    words.truncate(MAX_INCORRECT_WORDS);
    Ok(words)
}
