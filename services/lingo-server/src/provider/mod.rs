//! Generative-language model abstraction.
//!
//! The analysis pipeline only needs "prompt in, raw text out". Concrete
//! providers translate that into a vendor wire format and classify failures
//! into [`ModelError`] so callers can decide how to degrade.

mod gemini;

pub use gemini::{GeminiProvider, DEFAULT_PROBE_MODELS};

use async_trait::async_trait;
use lingo_common::config::ModelConfig;
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// Provider Trait
// ============================================================================

/// Unified interface for text-generation providers.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Get the model this provider sends prompts to.
    fn model(&self) -> &str;

    /// Send a single prompt and return the raw generated text.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Failure of a model invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Transport failure, provider outage, or rejected credentials.
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    /// Provider quota or rate limit reached (HTTP 429).
    #[error("Model rate limited: {0}")]
    RateLimited(String),

    /// The request did not complete in time.
    #[error("Model request timed out")]
    Timeout,

    /// The provider answered with a body we could not use.
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
}

impl ModelError {
    /// Short machine-readable label for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "unavailable",
            Self::RateLimited(_) => "rate_limited",
            Self::Timeout => "timeout",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }
}

impl From<reqwest::Error> for ModelError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ModelError::Timeout
        } else if e.is_decode() {
            ModelError::InvalidResponse(e.to_string())
        } else {
            ModelError::Unavailable(e.to_string())
        }
    }
}

/// Build the configured provider, or `None` when no credential is set.
pub fn create_provider(config: &ModelConfig) -> Result<Option<Arc<dyn Provider>>, ModelError> {
    let Some(key) = config.credential() else {
        return Ok(None);
    };
    Ok(Some(Arc::new(GeminiProvider::from_config(key, config)?)))
}
