//! Ordered intent pipeline.
//!
//! Stages run in a fixed order and the first one that decides wins:
//!
//! 1. empty input
//! 2. greeting (whole input, or any token when the input is short)
//! 3. small talk (whole input)
//! 4. direct topic key
//! 5. synonyms: exact phrase first, else the longest contained phrase
//! 6. department heuristic (two or more departments named, no HOD keyword)
//! 7. fuzzy similarity, when enabled
//!
//! Stages 5 and 6 always scan every entry before deciding.

use kbchat_core::config::MatcherSettings;
use kbchat_core::normalize::normalize_with;
use kbchat_core::traits::Resolver;
use kbchat_core::types::{Lexicon, MatchOutcome, MatchResult, Strategy, DEPARTMENTS_TOPIC};

use crate::department::mentioned_departments;
use crate::fuzzy;

pub struct IntentMatcher {
    settings: MatcherSettings,
    hod_keywords: Vec<String>,
}

impl Default for IntentMatcher {
    fn default() -> Self { Self::new(MatcherSettings::default()) }
}

impl IntentMatcher {
    pub fn new(settings: MatcherSettings) -> Self {
        let options = settings.normalize_options();
        let hod_keywords = settings
            .hod_keywords
            .iter()
            .map(|k| normalize_with(k, options))
            .filter(|k| !k.is_empty())
            .collect();
        Self { settings, hod_keywords }
    }

    /// Run the pipeline on already-normalized input.
    pub fn match_input(&self, input: &str, lexicon: &Lexicon) -> MatchResult {
        let result = if input.is_empty() {
            MatchResult::empty()
        } else {
            self.greeting(input, lexicon)
                .or_else(|| self.small_talk(input, lexicon))
                .or_else(|| direct_key(input, lexicon))
                .or_else(|| self.synonym(input, lexicon))
                .or_else(|| self.departments(input, lexicon))
                .or_else(|| self.fuzzy(input, lexicon))
                .unwrap_or_else(MatchResult::no_match)
        };
        tracing::debug!(input, strategy = ?result.strategy, phrase = ?result.phrase, "resolved");
        result
    }

    fn greeting(&self, input: &str, lexicon: &Lexicon) -> Option<MatchResult> {
        let keys: Vec<(&String, String)> = lexicon.greetings.keys().map(|k| (k, self.normalize(k))).collect();
        let hit = |candidate: &str| keys.iter().find(|(_, norm)| norm == candidate).map(|(key, _)| *key);

        let key = hit(input).or_else(|| {
            let tokens: Vec<&str> = input.split(' ').collect();
            if tokens.len() <= self.settings.greeting_token_limit {
                tokens.into_iter().find_map(hit)
            } else {
                None
            }
        })?;
        Some(MatchResult::new(MatchOutcome::Greeting(key.clone()), Strategy::Greeting).with_phrase(key.as_str()))
    }

    fn small_talk(&self, input: &str, lexicon: &Lexicon) -> Option<MatchResult> {
        let key = lexicon.small_talk.keys().find(|k| self.normalize(k) == input)?;
        Some(MatchResult::new(MatchOutcome::SmallTalk(key.clone()), Strategy::SmallTalk).with_phrase(key.as_str()))
    }

    fn synonym(&self, input: &str, lexicon: &Lexicon) -> Option<MatchResult> {
        let mut best: Option<(&str, String)> = None;
        for (topic, phrases) in &lexicon.synonyms {
            for phrase in phrases {
                let syn = self.normalize(phrase);
                if syn.is_empty() {
                    continue;
                }
                if syn == input {
                    return Some(
                        MatchResult::new(MatchOutcome::Topic(topic.clone()), Strategy::SynonymExact).with_phrase(syn),
                    );
                }
                if input.contains(&syn) && best.as_ref().map_or(true, |(_, b)| char_len(&syn) > char_len(b)) {
                    best = Some((topic.as_str(), syn));
                }
            }
        }
        let (topic, syn) = best?;
        Some(MatchResult::new(MatchOutcome::Topic(topic.to_string()), Strategy::SynonymContains).with_phrase(syn))
    }

    fn departments(&self, input: &str, lexicon: &Lexicon) -> Option<MatchResult> {
        if self.hod_keywords.iter().any(|k| input.contains(k.as_str())) {
            return None;
        }
        let mentioned = mentioned_departments(input, &lexicon.departments, self.settings.normalize_options());
        if mentioned.len() < 2 {
            return None;
        }
        Some(
            MatchResult::new(MatchOutcome::Topic(DEPARTMENTS_TOPIC.to_string()), Strategy::DepartmentHeuristic)
                .with_phrase(mentioned.join(", ")),
        )
    }

    fn fuzzy(&self, input: &str, lexicon: &Lexicon) -> Option<MatchResult> {
        if !self.settings.fuzzy_enabled {
            return None;
        }
        let hit = fuzzy::best_match(input, lexicon, self.settings.fuzzy_threshold, self.settings.normalize_options())?;
        Some(MatchResult::new(MatchOutcome::Topic(hit.topic), Strategy::Fuzzy).with_phrase(hit.phrase))
    }
}

fn direct_key(input: &str, lexicon: &Lexicon) -> Option<MatchResult> {
    lexicon
        .has_topic(input)
        .then(|| MatchResult::new(MatchOutcome::Topic(input.to_string()), Strategy::DirectKey).with_phrase(input))
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

impl Resolver for IntentMatcher {
    fn normalize(&self, raw: &str) -> String {
        normalize_with(raw, self.settings.normalize_options())
    }

    fn resolve(&self, normalized: &str, lexicon: &Lexicon) -> anyhow::Result<MatchResult> {
        Ok(self.match_input(normalized, lexicon))
    }
}
