//! Analysis orchestrator.
//!
//! Drives one analysis call through validate → offline fallback → model with
//! fallback. Every model-side failure is recovered here into a typed result;
//! only validation problems reach the caller as errors.

use std::sync::Arc;
use tracing::{debug, info, warn, Instrument};

use lingo_common::config::ModelConfig;
use lingo_common::logging::generate_trace_id;
use lingo_common::request_span;

use super::interpreter::{interpret_sentence, interpret_word, Interpretation};
use super::prompt::{sentence_prompt, word_prompt};
use super::types::{
    SentenceAnalysisRequest, SentenceAnalysisResult, WordAnalysisRequest, WordAnalysisResult,
    DEGRADED_MATCH_CONFIDENCE, OFFLINE_MATCH_CONFIDENCE,
};
use crate::error::ApiError;
use crate::provider::{create_provider, ModelError, Provider};

/// Orchestrates pronunciation analysis against an optional model provider.
pub struct AnalysisOrchestrator {
    /// `None` means no credential was configured
    provider: Option<Arc<dyn Provider>>,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator around an optional provider.
    pub fn new(provider: Option<Arc<dyn Provider>>) -> Self {
        Self { provider }
    }

    /// Create an orchestrator that always answers from the offline fallbacks.
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// Create an orchestrator from model configuration.
    pub fn from_config(config: &ModelConfig) -> Result<Self, ModelError> {
        Ok(Self::new(create_provider(config)?))
    }

    /// Whether a model provider is configured.
    pub fn is_model_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Name of the configured model, if any.
    pub fn model_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.model())
    }

    /// Analyze a spoken sentence against its original text.
    pub async fn analyze_sentence(
        &self,
        request: &SentenceAnalysisRequest,
    ) -> Result<SentenceAnalysisResult, ApiError> {
        let (original, transcribed) = match (
            required(&request.original_text),
            required(&request.transcribed_text),
        ) {
            (Some(original), Some(transcribed)) => (original, transcribed),
            _ => {
                return Err(ApiError::Validation(
                    "originalText e transcribedText são obrigatórios".into(),
                ))
            }
        };

        let Some(provider) = &self.provider else {
            debug!("No model configured, returning offline sentence analysis");
            return Ok(SentenceAnalysisResult::offline());
        };

        let span = request_span!(
            "analyze_sentence",
            generate_trace_id(),
            provider = provider.name(),
            model = %provider.model()
        );

        async move {
            let prompt = sentence_prompt(original, transcribed);

            let raw = match provider.generate(&prompt).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(
                        error = %e,
                        kind = e.kind(),
                        "Model call failed, returning degraded sentence analysis"
                    );
                    return Ok(SentenceAnalysisResult::model_failure());
                }
            };

            let result = match interpret_sentence(&raw) {
                Interpretation::Parsed(result) => {
                    info!(
                        score = result.score,
                        incorrect_words = result.incorrect_words.len(),
                        "Sentence analysis completed"
                    );
                    result
                }
                Interpretation::Unparsed(text) => {
                    warn!(chars = text.len(), "Model output was not valid analysis JSON");
                    SentenceAnalysisResult::unparsed(text)
                }
            };

            Ok::<_, ApiError>(result)
        }
        .instrument(span)
        .await
    }

    /// Analyze a single spoken word against the expected word.
    pub async fn analyze_word(
        &self,
        request: &WordAnalysisRequest,
    ) -> Result<WordAnalysisResult, ApiError> {
        let (expected, spoken) = match (
            required(&request.expected_word),
            required(&request.spoken_word),
        ) {
            (Some(expected), Some(spoken)) => (expected, spoken),
            _ => {
                return Err(ApiError::Validation(
                    "expectedWord e spokenWord são obrigatórios".into(),
                ))
            }
        };

        let Some(provider) = &self.provider else {
            debug!("No model configured, comparing words locally");
            return Ok(WordAnalysisResult::compare(
                expected,
                spoken,
                OFFLINE_MATCH_CONFIDENCE,
            ));
        };

        let span = request_span!(
            "analyze_word",
            generate_trace_id(),
            provider = provider.name(),
            model = %provider.model()
        );

        async move {
            let prompt = word_prompt(expected, spoken);

            let raw = match provider.generate(&prompt).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(
                        error = %e,
                        kind = e.kind(),
                        "Model call failed, comparing words locally"
                    );
                    return Ok(WordAnalysisResult::compare(
                        expected,
                        spoken,
                        DEGRADED_MATCH_CONFIDENCE,
                    ));
                }
            };

            let result = match interpret_word(&raw) {
                Interpretation::Parsed(result) => {
                    info!(
                        is_correct = result.is_correct,
                        confidence = result.confidence,
                        "Word analysis completed"
                    );
                    result
                }
                Interpretation::Unparsed(text) => {
                    warn!(chars = text.len(), "Model output was not valid word JSON");
                    WordAnalysisResult::compare(expected, spoken, DEGRADED_MATCH_CONFIDENCE)
                }
            };

            Ok::<_, ApiError>(result)
        }
        .instrument(span)
        .await
    }
}

/// A present, non-empty field. Whitespace-only values are accepted.
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
