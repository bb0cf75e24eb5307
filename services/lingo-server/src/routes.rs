//! HTTP API routes.

use crate::analysis::{
    AnalysisOrchestrator, SentenceAnalysisRequest, SentenceAnalysisResult, WordAnalysisRequest,
    WordAnalysisResult,
};
use crate::catalog::{shuffled_vocabulary, Catalog, PracticeText, StaticCatalog, VocabularyWord};
use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<AnalysisOrchestrator>,
    pub catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new(orchestrator: AnalysisOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            catalog: Arc::new(StaticCatalog),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(root))
        .route("/health", get(health_check))
        // Analysis
        .route("/api/analyze-pronunciation", post(analyze_pronunciation))
        .route(
            "/api/analyze-word-pronunciation",
            post(analyze_word_pronunciation),
        )
        // Catalogs
        .route("/api/practice-texts", get(practice_texts))
        .route("/api/vocabulary-words", get(vocabulary_words))
        .with_state(state)
}

// ============ Liveness ============

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "English Practice API está rodando!"
    }))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "lingo-server",
        "version": env!("CARGO_PKG_VERSION"),
        "modelAvailable": state.orchestrator.is_model_available()
    }))
}

// ============ Analysis ============

async fn analyze_pronunciation(
    State(state): State<AppState>,
    payload: Result<Json<SentenceAnalysisRequest>, JsonRejection>,
) -> Result<Json<SentenceAnalysisResult>, ApiError> {
    let request = request_or_empty(payload)?;
    let result = state.orchestrator.analyze_sentence(&request).await?;
    Ok(Json(result))
}

async fn analyze_word_pronunciation(
    State(state): State<AppState>,
    payload: Result<Json<WordAnalysisRequest>, JsonRejection>,
) -> Result<Json<WordAnalysisResult>, ApiError> {
    let request = request_or_empty(payload)?;
    let result = state.orchestrator.analyze_word(&request).await?;
    Ok(Json(result))
}

/// A body sent without a JSON content type carries no fields, so it fails
/// field validation instead of surfacing as a rejection.
fn request_or_empty<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(e) => Err(e.into()),
    }
}

// ============ Catalogs ============

async fn practice_texts(State(state): State<AppState>) -> Json<Vec<PracticeText>> {
    Json(state.catalog.practice_texts())
}

#[derive(Debug, Deserialize)]
struct VocabularyQuery {
    category: Option<String>,
}

async fn vocabulary_words(
    State(state): State<AppState>,
    Query(query): Query<VocabularyQuery>,
) -> Json<Vec<VocabularyWord>> {
    let words = shuffled_vocabulary(state.catalog.as_ref(), query.category.as_deref());
    tracing::debug!(
        category = query.category.as_deref().unwrap_or("all"),
        count = words.len(),
        "Serving vocabulary words"
    );
    Json(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_router(AppState::new(AnalysisOrchestrator::offline()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "English Practice API está rodando!");
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "lingo-server");
        assert_eq!(json["modelAvailable"], false);
    }

    #[tokio::test]
    async fn test_analyze_missing_field_is_bad_request() {
        let response = test_app()
            .oneshot(post_json(
                "/api/analyze-pronunciation",
                r#"{"originalText": "Hello"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "originalText e transcribedText são obrigatórios");
    }

    #[tokio::test]
    async fn test_analyze_malformed_body_is_internal_error() {
        let response = test_app()
            .oneshot(post_json("/api/analyze-pronunciation", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Erro ao processar análise");
        assert!(json["details"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_without_content_type_is_bad_request() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze-pronunciation")
                    .body(Body::from(r#"{"originalText": "Hi", "transcribedText": "Hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "originalText e transcribedText são obrigatórios");

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze-word-pronunciation")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "expectedWord e spokenWord são obrigatórios");
    }

    #[tokio::test]
    async fn test_analyze_word_offline() {
        let response = test_app()
            .oneshot(post_json(
                "/api/analyze-word-pronunciation",
                r#"{"expectedWord": "Chess", "spokenWord": "chess"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["isCorrect"], true);
        assert_eq!(json["confidence"], 100);
    }

    #[tokio::test]
    async fn test_vocabulary_filter() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/vocabulary-words?category=games")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let words = json.as_array().unwrap();
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| w["category"] == "games"));
    }
}
