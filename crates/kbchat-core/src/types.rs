//! Domain types shared by the matcher, the renderer and the query service.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type TopicKey = String;
pub type PhraseTable = IndexMap<String, String>;
pub type SynonymTable = IndexMap<TopicKey, Vec<String>>;

/// Reserved topic the department heuristic resolves to.
pub const DEPARTMENTS_TOPIC: &str = "departments";

/// Payload attached to a topic.
///
/// Maps keep their configured field order; templates iterate them in that
/// order, so `serde_json` is built with `preserve_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopicValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<TopicValue>),
    Map(IndexMap<String, TopicValue>),
}

impl TopicValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, TopicValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Field lookup on a map value; `None` for other shapes.
    pub fn field(&self, key: &str) -> Option<&TopicValue> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Empty strings, empty collections, `false`, zero and null count as absent
    /// when a template decides whether to print an optional line.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(m) => m.is_empty(),
        }
    }
}

impl fmt::Display for TopicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("N/A"),
            Self::Bool(b) => write!(f, "{}", if *b { "Yes" } else { "No" }),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Map(m) => {
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for TopicValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Immutable knowledge base the engine answers from.
///
/// Built once at startup (see `loader`) and shared read-only by every query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    pub topics: IndexMap<TopicKey, TopicValue>,
    #[serde(default)]
    pub synonyms: SynonymTable,
    #[serde(default)]
    pub greetings: PhraseTable,
    #[serde(default)]
    pub small_talk: PhraseTable,
    #[serde(default)]
    pub departments: Vec<String>,
}

impl Lexicon {
    pub fn topic(&self, key: &str) -> Option<&TopicValue> {
        self.topics.get(key)
    }

    pub fn has_topic(&self, key: &str) -> bool {
        self.topics.contains_key(key)
    }

    pub fn topic_keys(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }
}

/// Which pipeline stage produced a decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    EmptyInput,
    Greeting,
    SmallTalk,
    DirectKey,
    SynonymExact,
    SynonymContains,
    DepartmentHeuristic,
    Fuzzy,
    Unmatched,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum MatchOutcome {
    Empty,
    Greeting(String),
    SmallTalk(String),
    Topic(TopicKey),
    NoMatch,
}

/// Outcome of one matcher run plus the diagnostics behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub strategy: Strategy,
    /// The configured phrase (synonym, greeting key, department) that decided the match.
    pub phrase: Option<String>,
}

impl MatchResult {
    pub fn new(outcome: MatchOutcome, strategy: Strategy) -> Self {
        Self { outcome, strategy, phrase: None }
    }

    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }

    pub fn empty() -> Self {
        Self::new(MatchOutcome::Empty, Strategy::EmptyInput)
    }

    pub fn no_match() -> Self {
        Self::new(MatchOutcome::NoMatch, Strategy::Unmatched)
    }

    pub fn topic(&self) -> Option<&str> {
        match &self.outcome {
            MatchOutcome::Topic(t) => Some(t),
            _ => None,
        }
    }
}

/// How an answer was produced, for analytics and transport status mapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Prompt,
    Greeting,
    SmallTalk,
    Topic,
    Fallback,
    Failure,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseResult {
    pub response: String,
    pub matched: Option<TopicKey>,
    pub kind: AnswerKind,
}

impl ResponseResult {
    pub fn canned(response: impl Into<String>, kind: AnswerKind) -> Self {
        Self { response: response.into(), matched: None, kind }
    }

    pub fn topic(response: String, topic: impl Into<TopicKey>) -> Self {
        Self { response, matched: Some(topic.into()), kind: AnswerKind::Topic }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == AnswerKind::Failure
    }
}
