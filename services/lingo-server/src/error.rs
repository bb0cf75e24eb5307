//! Error types for lingo-server.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Headline returned with every 500 response.
const INTERNAL_ERROR_MESSAGE: &str = "Erro ao processar análise";

/// Errors surfaced to API callers.
///
/// Model failures never appear here: the orchestrator recovers them into
/// fallback results.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Internal(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ApiError::Validation(message) => ErrorBody {
                error: message,
                details: None,
            },
            ApiError::Internal(details) => {
                tracing::error!(details = %details, "Request failed with internal error");
                ErrorBody {
                    error: INTERNAL_ERROR_MESSAGE.to_string(),
                    details: Some(details),
                }
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
