//! kbchat-server: serves the query service over HTTP.
//!
//! Configuration comes from `config.toml` / `config.<RUST_ENV>.toml` / `APP_*`
//! in the working directory. `PORT` overrides the port of `server.bind_addr`.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use kbchat_core::config::Config;
use kbchat_engine::QueryService;
use kbchat_server::build_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = Config::load()?.settings()?;
    let service = Arc::new(QueryService::open(Path::new("."), &settings)?);
    tracing::info!(topics = service.lexicon().topics.len(), "query service ready");

    let bind_addr = bind_addr(&settings.server.bind_addr, std::env::var("PORT").ok().as_deref());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!("kbchat-server listening on {bind_addr}");

    axum::serve(listener, build_router(service)).await.context("server error")?;
    Ok(())
}

/// Replace the port of `configured` with `port` when one is given.
fn bind_addr(configured: &str, port: Option<&str>) -> String {
    match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(port) => {
            let host = configured.rsplit_once(':').map_or(configured, |(host, _)| host);
            format!("{host}:{port}")
        }
        None => configured.to_string(),
    }
}
