use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use kbchat_core::config::Settings;
use kbchat_core::loader::LexiconLoader;
use kbchat_core::traits::Resolver;
use kbchat_core::types::{Lexicon, MatchResult};
use kbchat_engine::{messages, QueryService};
use kbchat_render::TemplateRenderer;
use kbchat_server::build_router;

fn lexicon() -> Arc<Lexicon> {
    let info = serde_json::from_value(json!({
        "admissions": "Admissions open in June.",
        "library": "Open 9 to 5.",
        "responses": {"greetings": {"hello": "Hello! How can I help?"}, "small_talk": {}}
    }))
    .expect("info");
    let synonyms = serde_json::from_value(json!({"admissions": ["apply"]})).expect("synonyms");
    Arc::new(LexiconLoader::new().build(info, synonyms))
}

fn app() -> Router {
    build_router(Arc::new(QueryService::from_settings(lexicon(), &Settings::default())))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let bytes = resp.into_body().collect().await.expect("body").to_bytes();
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn chat_answers_topic_questions() {
    let (status, body) = send(app(), chat(r#"{"message": "How do I apply?"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Admissions open in June.", "matched": "admissions", "kind": "topic"}));
}

#[tokio::test]
async fn chat_greeting_has_null_match() {
    let (status, body) = send(app(), chat(r#"{"message": "hello there"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Hello! How can I help?");
    assert!(body["matched"].is_null());
    assert_eq!(body["kind"], "greeting");
}

#[tokio::test]
async fn chat_without_message_gets_prompt() {
    for payload in [r#"{}"#, r#"{"message": "   "}"#, "", "  \n\t "] {
        let (status, body) = send(app(), chat(payload)).await;
        assert_eq!(status, StatusCode::OK, "payload {payload:?}");
        assert!(body["response"].as_str().unwrap().starts_with("I'm ready to help!"));
        assert_eq!(body["kind"], "prompt");
    }
}

#[tokio::test]
async fn chat_gibberish_gets_fallback() {
    let (status, body) = send(app(), chat(r#"{"message": "qwerty zxcv"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], messages::FALLBACK);
    assert!(body["matched"].is_null());
    assert_eq!(body["kind"], "fallback");
}

#[tokio::test]
async fn chat_with_broken_body_is_500_apology() {
    let (status, body) = send(app(), chat("not json")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["response"], messages::APOLOGY);
}

struct Broken;

impl Resolver for Broken {
    fn resolve(&self, _normalized: &str, _lexicon: &Lexicon) -> anyhow::Result<MatchResult> {
        anyhow::bail!("index unavailable")
    }
}

#[tokio::test]
async fn engine_failure_maps_to_500() {
    let svc = QueryService::new(lexicon(), Broken, TemplateRenderer::default(), "X");
    let (status, body) = send(build_router(Arc::new(svc)), chat(r#"{"message": "library"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"response": messages::APOLOGY, "matched": null, "kind": "failure"}));
}

#[tokio::test]
async fn info_uses_topic_query() {
    let (status, body) = send(app(), get("/info?topic=library")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Open 9 to 5.", "matched": "library", "kind": "topic"}));

    let (_, body) = send(app(), get("/info")).await;
    assert!(body["response"].as_str().unwrap().starts_with("I'm ready to help!"));
}

#[tokio::test]
async fn health_is_static() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
