//! Builds a [`Lexicon`] from the knowledge-base and synonym JSON files.
//!
//! `college_info.json` is an object of topic → value. Its `responses` entry
//! is not a topic: it carries the `greetings` and `small_talk` phrase tables.
//! `synonyms.json` maps topic → list of phrases.

use indexmap::IndexMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Lexicon, PhraseTable, SynonymTable, TopicValue, DEPARTMENTS_TOPIC};

const RESPONSES_KEY: &str = "responses";

#[derive(Debug, Default)]
pub struct LexiconLoader;

impl LexiconLoader {
    pub fn new() -> Self { Self }

    pub fn load(&self, college_info: &Path, synonyms: &Path) -> Result<Lexicon> {
        let info: IndexMap<String, TopicValue> = read_json_or_default(college_info)?;
        let synonyms: SynonymTable = read_json_or_default(synonyms)?;
        let lexicon = self.build(info, synonyms);
        tracing::info!(
            topics = lexicon.topics.len(),
            synonym_topics = lexicon.synonyms.len(),
            greetings = lexicon.greetings.len(),
            small_talk = lexicon.small_talk.len(),
            departments = lexicon.departments.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    pub fn build(&self, mut info: IndexMap<String, TopicValue>, synonyms: SynonymTable) -> Lexicon {
        let responses = info.shift_remove(RESPONSES_KEY);
        let greetings = phrase_table(responses.as_ref(), "greetings");
        let small_talk = phrase_table(responses.as_ref(), "small_talk");
        let departments = match info.get(DEPARTMENTS_TOPIC) {
            Some(TopicValue::List(items)) => items.iter().filter_map(|v| v.as_text().map(str::to_string)).collect(),
            _ => Vec::new(),
        };
        Lexicon { topics: info, synonyms, greetings, small_talk, departments }
    }
}

fn phrase_table(responses: Option<&TopicValue>, section: &str) -> PhraseTable {
    responses
        .and_then(|r| r.field(section))
        .and_then(TopicValue::as_map)
        .map(|m| m.iter().map(|(k, v)| (k.clone(), v.to_string())).collect())
        .unwrap_or_default()
}

fn read_json_or_default<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "data file not found, using empty section");
            return Ok(T::default());
        }
        Err(source) => return Err(Error::Io { path: path.display().to_string(), source }),
    };
    serde_json::from_str(&raw).map_err(|source| Error::Parse { path: path.display().to_string(), source })
}
