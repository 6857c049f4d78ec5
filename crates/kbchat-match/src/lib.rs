//! kbchat-match
//!
//! Resolves normalized user input to a topic key through an ordered pipeline:
//! greeting, small talk, direct key, synonyms, department heuristic and an
//! optional fuzzy fallback. See `matcher` for the ordering rules.

pub mod department;
pub mod fuzzy;
pub mod matcher;

pub use matcher::IntentMatcher;
