//! Google Gemini provider.
//!
//! Talks to the Generative Language REST API with an API key passed as the
//! `key` query parameter.

use super::{ModelError, Provider};
use async_trait::async_trait;
use lingo_common::config::ModelConfig;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Models tried by [`GeminiProvider::probe`] when no candidates are given.
pub const DEFAULT_PROBE_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-pro",
];

const PROBE_PROMPT: &str = "Say \"test successful\"";

/// Gemini provider bound to one model.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

// ══════════════════════════════════════════════════════════════════════════════
// API REQUEST/RESPONSE TYPES
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// `timeout` of `None` leaves request timing to the transport. Fails when
    /// the HTTP client cannot be built, rather than dropping the timeout.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ModelError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            ModelError::Unavailable(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a provider from model configuration and an already-resolved key.
    pub fn from_config(api_key: &str, config: &ModelConfig) -> Result<Self, ModelError> {
        Self::new(
            api_key,
            config.model.clone(),
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// List the Gemini models visible to this API key, without the `models/` prefix.
    pub async fn list_models(&self) -> Result<Vec<String>, ModelError> {
        let url = format!("{}/v1/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &error_text));
        }

        let result: ListModelsResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(format!("Failed to parse model list: {}", e)))?;

        if let Some(err) = result.error {
            return Err(ModelError::Unavailable(err.message));
        }

        Ok(result
            .models
            .into_iter()
            .filter(|m| m.name.contains("gemini"))
            .map(|m| m.name.trim_start_matches("models/").to_string())
            .collect())
    }

    /// Try a short prompt against each candidate model and return the first that answers.
    pub async fn probe(&self, candidates: &[String]) -> Result<String, ModelError> {
        let mut last_error = ModelError::Unavailable("No candidate models given".into());

        for model in candidates {
            match self.generate_with_model(model, PROBE_PROMPT).await {
                Ok(reply) => {
                    tracing::info!(model = %model, reply = %reply.trim(), "Model answered probe");
                    return Ok(model.clone());
                }
                Err(e) => {
                    tracing::info!(model = %model, error = %e, "Model not available");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    async fn generate_with_model(&self, model: &str, prompt: &str) -> Result<String, ModelError> {
        let start = Instant::now();

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let model_name = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        };

        let url = format!("{}/v1beta/{}:generateContent", self.base_url, model_name);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &error_text));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        if let Some(err) = result.error {
            return Err(ModelError::Unavailable(format!("API error: {}", err.message)));
        }

        let candidate = result
            .candidates
            .and_then(|c| c.into_iter().next())
            .ok_or_else(|| ModelError::InvalidResponse("No response from Gemini".into()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ModelError::InvalidResponse(format!(
                "Empty response from Gemini (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        tracing::debug!(
            model = %model,
            latency_ms = start.elapsed().as_millis() as u64,
            chars = text.len(),
            "Gemini generation completed"
        );

        Ok(text)
    }
}

/// Map a non-success HTTP status and body onto a model error.
fn classify_status(status: StatusCode, body: &str) -> ModelError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());
    let detail = format!("API error ({}): {}", status.as_u16(), message);

    match status {
        StatusCode::TOO_MANY_REQUESTS => ModelError::RateLimited(detail),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ModelError::Timeout,
        _ => ModelError::Unavailable(detail),
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.generate_with_model(&self.model, prompt).await
    }
}
