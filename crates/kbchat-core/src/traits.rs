use crate::normalize::normalize;
use crate::types::{Lexicon, MatchResult, TopicValue};

/// Turns normalized input into a match decision against a lexicon.
pub trait Resolver: Send + Sync {
    /// Canonical form of raw input, with the same options the resolver
    /// applies to its configured phrases.
    fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }

    fn resolve(&self, normalized: &str, lexicon: &Lexicon) -> anyhow::Result<MatchResult>;
}

/// Turns a resolved topic and its payload into user-facing text.
pub trait Renderer: Send + Sync {
    fn render(&self, topic: &str, value: &TopicValue) -> anyhow::Result<String>;
}
