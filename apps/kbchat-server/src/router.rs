//! Router construction.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use kbchat_core::traits::{Renderer, Resolver};
use kbchat_engine::QueryService;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the full router. The service is shared read-only across requests.
pub fn build_router<R, T>(service: Arc<QueryService<R, T>>) -> Router
where
    R: Resolver + 'static,
    T: Renderer + 'static,
{
    Router::new()
        .route("/chat", post(handlers::chat::<R, T>))
        .route("/info", get(handlers::info::<R, T>))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(service))
}
