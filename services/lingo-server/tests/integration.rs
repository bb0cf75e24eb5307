//! Integration tests for lingo-server.

use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lingo_server::{
    build_router, AnalysisOrchestrator, AppState, GeminiProvider, Provider,
    SentenceAnalysisResult,
};

fn offline_app() -> axum::Router {
    build_router(AppState::new(AnalysisOrchestrator::offline()))
}

fn gemini_app(server: &MockServer) -> axum::Router {
    let provider: Arc<dyn Provider> = Arc::new(
        GeminiProvider::new("test-key", "gemini-2.5-flash", server.uri(), None).unwrap(),
    );
    build_router(AppState::new(AnalysisOrchestrator::new(Some(provider))))
}

fn gemini_text(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_offline_sentence_analysis() {
    let (status, json) = send(
        offline_app(),
        post_json(
            "/api/analyze-pronunciation",
            json!({
                "originalText": "I like to read books.",
                "transcribedText": "I like to read book"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::to_value(SentenceAnalysisResult::offline()).unwrap());
    assert_eq!(json["score"], 70);
    assert_eq!(json["incorrectWords"], json!([]));
}

#[tokio::test]
async fn test_offline_word_analysis_ignores_case_and_whitespace() {
    let (status, json) = send(
        offline_app(),
        post_json(
            "/api/analyze-word-pronunciation",
            json!({ "expectedWord": "Pizza", "spokenWord": "  pizza " }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["isCorrect"], true);
    assert_eq!(json["confidence"], 100);

    let (status, json) = send(
        offline_app(),
        post_json(
            "/api/analyze-word-pronunciation",
            json!({ "expectedWord": "Pizza", "spokenWord": "piece" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["isCorrect"], false);
    assert_eq!(json["confidence"], 60);
}

#[tokio::test]
async fn test_missing_or_empty_fields_are_rejected() {
    let (status, json) = send(
        offline_app(),
        post_json(
            "/api/analyze-pronunciation",
            json!({ "originalText": "Hello", "transcribedText": "" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "originalText e transcribedText são obrigatórios");

    let (status, json) = send(
        offline_app(),
        post_json(
            "/api/analyze-pronunciation",
            json!({ "originalText": "Hello", "transcribedText": "   " }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 70);

    let (status, json) = send(
        offline_app(),
        post_json(
            "/api/analyze-word-pronunciation",
            json!({ "expectedWord": "Chess" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "expectedWord e spokenWord são obrigatórios");
}

#[tokio::test]
async fn test_model_analysis_with_fenced_json() {
    let server = MockServer::start().await;
    let reply = "```json\n{\"score\": 88, \"incorrectWords\": [{\"word\": \"books\", \"userPronounced\": \"book\", \"tip\": \"Pronuncie o 's' final.\"}], \"feedback\": \"Muito bem!\", \"suggestions\": \"Atenção aos plurais.\"}\n```";

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text(reply)))
        .expect(1)
        .mount(&server)
        .await;

    let (status, json) = send(
        gemini_app(&server),
        post_json(
            "/api/analyze-pronunciation",
            json!({
                "originalText": "I like to read books.",
                "transcribedText": "I like to read book"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 88);
    assert_eq!(json["incorrectWords"][0]["word"], "books");
    assert_eq!(json["incorrectWords"][0]["userPronounced"], "book");
    assert_eq!(json["feedback"], "Muito bem!");
}

#[tokio::test]
async fn test_model_rate_limit_degrades() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Quota exceeded" }
        })))
        .mount(&server)
        .await;

    let app = gemini_app(&server);

    let (status, json) = send(
        app.clone(),
        post_json(
            "/api/analyze-pronunciation",
            json!({ "originalText": "Good morning.", "transcribedText": "Good morning" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::to_value(SentenceAnalysisResult::model_failure()).unwrap()
    );

    let (status, json) = send(
        app,
        post_json(
            "/api/analyze-word-pronunciation",
            json!({ "expectedWord": "Chess", "spokenWord": "CHESS" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["isCorrect"], true);
    assert_eq!(json["confidence"], 90);
}

#[tokio::test]
async fn test_model_garbage_keeps_text_as_feedback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_text("Your pronunciation was great.")),
        )
        .mount(&server)
        .await;

    let (status, json) = send(
        gemini_app(&server),
        post_json(
            "/api/analyze-pronunciation",
            json!({ "originalText": "Thank you.", "transcribedText": "Thank you" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 70);
    assert_eq!(json["feedback"], "Your pronunciation was great.");
    assert_eq!(json["suggestions"], "Continue praticando!");
}

#[tokio::test]
async fn test_practice_catalog() {
    let (status, json) = send(offline_app(), get("/api/practice-texts")).await;

    assert_eq!(status, StatusCode::OK);
    let texts = json.as_array().unwrap();
    assert_eq!(texts.len(), 120);
    assert_eq!(texts[0]["level"], "beginner");
    assert_eq!(texts[119]["level"], "advanced");
}

#[tokio::test]
async fn test_vocabulary_is_permutation_of_catalog() {
    let (_, first) = send(offline_app(), get("/api/vocabulary-words")).await;
    let (_, all) = send(offline_app(), get("/api/vocabulary-words?category=all")).await;

    let ids = |value: &serde_json::Value| -> HashSet<u64> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["id"].as_u64().unwrap())
            .collect()
    };

    let first_ids = ids(&first);
    assert_eq!(first_ids.len(), first.as_array().unwrap().len());
    assert_eq!(first_ids, ids(&all));
}

#[tokio::test]
async fn test_vocabulary_order_varies_across_calls() {
    let mut orders = Vec::new();
    for _ in 0..5 {
        let (status, json) = send(offline_app(), get("/api/vocabulary-words")).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<u64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids.len(), 60);
        orders.push(ids);
    }

    let id_order: Vec<u64> = (1..=60).collect();
    assert!(orders.iter().any(|ids| *ids != id_order));
    assert!(orders.iter().any(|ids| *ids != orders[0]));
}

#[tokio::test]
async fn test_vocabulary_category_filter() {
    let (status, json) = send(offline_app(), get("/api/vocabulary-words?category=food")).await;

    assert_eq!(status, StatusCode::OK);
    let words = json.as_array().unwrap();
    assert!(words.iter().any(|w| w["word"] == "Pizza"));
    assert!(words.iter().all(|w| w["category"] == "food"));

    let (_, json) = send(offline_app(), get("/api/vocabulary-words?category=dinosaurs")).await;
    assert_eq!(json, json!([]));
}
