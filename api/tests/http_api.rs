//! HTTP-level integration tests for the REST surface and the chat bridge.
//!
//! These drive the real router over the real embedded catalog; only the
//! upstream text-generation call is substituted.

use std::sync::Arc;

use ai_llm_service::{
    TextGenerator,
    config::llm_provider::LlmProvider,
    error_handler::{AiLlmError, HttpError, ProviderError, ProviderErrorKind},
};
use api::{AppState, app};
use async_trait::async_trait;
use axum::body::Body;
use catalog::Catalog;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

// ── Upstream stand-ins ─────────────────────────────────────────

/// Always answers with a fixed string.
struct CannedGenerator(&'static str);

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AiLlmError> {
        Ok(self.0.to_string())
    }
}

/// Always fails the way a dead upstream would.
struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AiLlmError> {
        Err(ProviderError::new(
            LlmProvider::Gemini,
            ProviderErrorKind::HttpStatus(HttpError {
                status: StatusCode::TOO_MANY_REQUESTS,
                url: "https://generativelanguage.googleapis.com".into(),
                snippet: "quota exceeded".into(),
            }),
        )
        .into())
    }
}

/// Captures the prompt it was handed, then answers.
struct RecordingGenerator(std::sync::Mutex<Option<String>>);

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AiLlmError> {
        *self.0.lock().unwrap() = Some(prompt.to_string());
        Ok("ok".into())
    }
}

// ── Test app builder ───────────────────────────────────────────

fn test_app(generator: Arc<dyn TextGenerator>) -> axum::Router {
    let catalog = Catalog::load().expect("embedded catalog must load");
    app(Arc::new(AppState::with_generator(catalog, generator)))
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be JSON")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ── Catalog endpoints ──────────────────────────────────────────

#[tokio::test]
async fn parties_listing_returns_every_summary() {
    let app = test_app(Arc::new(CannedGenerator("unused")));

    let resp = app.oneshot(get("/api/parties")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let parties = body.as_array().expect("array of summaries");
    assert_eq!(parties.len(), 4);
    assert_eq!(parties[0]["id"], "bjp");

    // Summaries are a strict projection: exactly these keys, nothing else.
    let mut expected = vec![
        "id",
        "name",
        "logo",
        "tagline",
        "status",
        "lokSabhaSeats",
        "trustScore",
    ];
    expected.sort_unstable();
    for party in parties {
        let mut keys: Vec<&str> = party.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, expected);
    }
}

#[tokio::test]
async fn party_detail_resolves_politician_photos() {
    let app = test_app(Arc::new(CannedGenerator("unused")));

    let resp = app.clone().oneshot(get("/api/party/bjp")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let party = body_json(resp).await;
    assert_eq!(party["id"], "bjp");

    let politicians = party["politicians"].as_array().unwrap();
    assert!(!politicians.is_empty());

    for entry in politicians {
        let id = entry["id"].as_str().unwrap();
        let resp = app
            .clone()
            .oneshot(get(&format!("/api/politician/{id}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let politician = body_json(resp).await;
        assert_eq!(entry["photo"], politician["photo"]);
    }
}

#[tokio::test]
async fn politician_detail_returns_the_full_record() {
    let app = test_app(Arc::new(CannedGenerator("unused")));

    let resp = app.oneshot(get("/api/politician/modi")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let politician = body_json(resp).await;
    assert_eq!(politician["name"], "Narendra Modi");
    assert!(politician["politicalJourney"].as_array().unwrap().len() > 0);
    assert!(politician.get("id").is_none());
}

#[tokio::test]
async fn unknown_party_is_a_404_with_the_fixed_body() {
    let app = test_app(Arc::new(CannedGenerator("unused")));

    let resp = app.oneshot(get("/api/party/nonexistent")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Party not found" }));
}

#[tokio::test]
async fn unknown_politician_is_a_404_with_the_fixed_body() {
    let app = test_app(Arc::new(CannedGenerator("unused")));

    let resp = app
        .oneshot(get("/api/politician/nonexistent"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Politician not found" })
    );
}

// ── Chat bridge ────────────────────────────────────────────────

#[tokio::test]
async fn chatbot_requires_a_question() {
    let app = test_app(Arc::new(CannedGenerator("unused")));

    let resp = app
        .oneshot(post_json("/api/chatbot", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "No question provided." })
    );
}

#[tokio::test]
async fn chatbot_rejects_a_blank_question() {
    let app = test_app(Arc::new(CannedGenerator("unused")));

    let resp = app
        .oneshot(post_json("/api/chatbot", json!({ "question": "   " })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "No question provided." })
    );
}

#[tokio::test]
async fn chatbot_returns_the_upstream_answer_verbatim() {
    let app = test_app(Arc::new(CannedGenerator("X")));

    let resp = app
        .oneshot(post_json(
            "/api/chatbot",
            json!({ "question": "Who leads the BJP?", "history": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "answer": "X" }));
}

#[tokio::test]
async fn chatbot_maps_upstream_failure_to_a_generic_500() {
    let app = test_app(Arc::new(FailingGenerator));

    let resp = app
        .oneshot(post_json(
            "/api/chatbot",
            json!({ "question": "Who leads the BJP?" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Failed to get a response from the AI." })
    );
}

#[tokio::test]
async fn chatbot_embeds_catalog_history_and_question_in_the_prompt() {
    let recorder = Arc::new(RecordingGenerator(std::sync::Mutex::new(None)));
    let app = test_app(recorder.clone());

    let resp = app
        .oneshot(post_json(
            "/api/chatbot",
            json!({ "question": "Who leads the BJP?", "history": "User: hello" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let prompt = recorder.0.lock().unwrap().take().expect("prompt captured");
    assert!(prompt.contains("helpful political assistant"));
    assert!(prompt.contains("\"parties\""));
    assert!(prompt.contains("Bhartiya Janata Party (BJP)"));
    assert!(prompt.contains("CONVERSATION HISTORY:\nUser: hello"));
    assert!(prompt.contains("USER QUESTION:\nWho leads the BJP?"));
}
