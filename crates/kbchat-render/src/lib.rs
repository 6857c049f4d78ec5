//! kbchat-render
//!
//! Turns a topic and its payload into chat-ready text. Dispatch is on the
//! topic name plus the payload shape; see `renderer` for the table and
//! `templates` for the per-topic copy.

pub mod renderer;
pub mod templates;
pub mod text;

pub use renderer::TemplateRenderer;
