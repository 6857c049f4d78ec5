//! kbchat-server: axum routes over a shared [`QueryService`](kbchat_engine::QueryService).

pub mod handlers;
pub mod router;

pub use router::build_router;
