//! Request handlers. Every answer goes out as `{"response", "matched", "kind"}`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use kbchat_core::traits::{Renderer, Resolver};
use kbchat_core::types::{AnswerKind, ResponseResult, TopicKey};
use kbchat_engine::{messages, QueryService};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InfoParams {
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
    pub matched: Option<TopicKey>,
    /// Tells canned greetings and small talk apart from the fallback, which
    /// all carry `matched: null`.
    pub kind: AnswerKind,
}

impl From<ResponseResult> for ChatResponse {
    fn from(r: ResponseResult) -> Self {
        Self { response: r.response, matched: r.matched, kind: r.kind }
    }
}

fn reply(result: ResponseResult) -> Response {
    let status = if result.is_failure() { StatusCode::INTERNAL_SERVER_ERROR } else { StatusCode::OK };
    (status, Json(ChatResponse::from(result))).into_response()
}

/// POST /chat. A body that is not a JSON object gets the apology with 500;
/// a blank body or a missing `message` is the empty question.
pub async fn chat<R, T>(Extension(service): Extension<Arc<QueryService<R, T>>>, body: Bytes) -> Response
where
    R: Resolver + 'static,
    T: Renderer + 'static,
{
    let request: ChatRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ChatRequest::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable chat body");
                return reply(ResponseResult::canned(messages::APOLOGY, AnswerKind::Failure));
            }
        }
    };
    reply(service.answer(request.message.as_deref().unwrap_or_default()))
}

/// GET /info?topic=
pub async fn info<R, T>(
    Extension(service): Extension<Arc<QueryService<R, T>>>,
    Query(params): Query<InfoParams>,
) -> Response
where
    R: Resolver + 'static,
    T: Renderer + 'static,
{
    reply(service.info(params.topic.as_deref().unwrap_or_default()))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
