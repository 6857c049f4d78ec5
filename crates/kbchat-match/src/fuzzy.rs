use kbchat_core::normalize::{normalize_with, NormalizeOptions};
use kbchat_core::types::Lexicon;

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyHit {
    pub topic: String,
    pub phrase: String,
    pub score: f64,
}

/// Normalized edit-distance similarity in `[0, 1]`; 1 means identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Best candidate among topic keys and synonyms scoring at least `threshold`.
/// Ties keep the first candidate seen (topic keys first, then synonyms in order).
pub fn best_match(input: &str, lexicon: &Lexicon, threshold: f64, options: NormalizeOptions) -> Option<FuzzyHit> {
    let keys = lexicon.topic_keys().map(|k| (k, normalize_with(&k.replace('_', " "), options)));
    let synonyms = lexicon
        .synonyms
        .iter()
        .flat_map(|(topic, list)| list.iter().map(move |s| (topic.as_str(), normalize_with(s, options))));

    let mut best: Option<FuzzyHit> = None;
    for (topic, phrase) in keys.chain(synonyms) {
        if phrase.is_empty() {
            continue;
        }
        let score = similarity(input, &phrase);
        if score >= threshold && best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(FuzzyHit { topic: topic.to_string(), phrase, score });
        }
    }
    best
}
