//! kbchat-engine
//!
//! The query service: normalize → match → render for one message. This is
//! the only entry point transports call; it never fails, every path ends in
//! user-facing text.

pub mod messages;

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use kbchat_core::config::{resolve_with_base, Settings};
use kbchat_core::loader::LexiconLoader;
use kbchat_core::traits::{Renderer, Resolver};
use kbchat_core::types::{AnswerKind, Lexicon, MatchOutcome, MatchResult, ResponseResult};
use kbchat_match::IntentMatcher;
use kbchat_render::TemplateRenderer;

pub struct QueryService<R = IntentMatcher, T = TemplateRenderer>
where
    R: Resolver,
    T: Renderer,
{
    lexicon: Arc<Lexicon>,
    resolver: R,
    renderer: T,
    prompt: String,
}

impl QueryService {
    /// Load the data files named in `settings` (relative to `base`) and wire
    /// the default matcher and renderer.
    pub fn open(base: &Path, settings: &Settings) -> anyhow::Result<Self> {
        let college_info = resolve_with_base(base, &settings.data.college_info);
        let synonyms = resolve_with_base(base, &settings.data.synonyms);
        let lexicon = LexiconLoader::new()
            .load(&college_info, &synonyms)
            .with_context(|| format!("loading lexicon from {}", college_info.display()))?;
        Ok(Self::from_settings(Arc::new(lexicon), settings))
    }

    pub fn from_settings(lexicon: Arc<Lexicon>, settings: &Settings) -> Self {
        let prompt = messages::ready_prompt(&settings.render.institution);
        Self {
            lexicon,
            resolver: IntentMatcher::new(settings.matcher.clone()),
            renderer: TemplateRenderer::new(settings.render.clone()),
            prompt,
        }
    }
}

impl<R, T> QueryService<R, T>
where
    R: Resolver,
    T: Renderer,
{
    /// Normalization is the resolver's: input goes through `resolver.normalize`.
    pub fn new(lexicon: Arc<Lexicon>, resolver: R, renderer: T, institution: &str) -> Self {
        Self { lexicon, resolver, renderer, prompt: messages::ready_prompt(institution) }
    }

    pub fn lexicon(&self) -> &Lexicon { &self.lexicon }

    /// Answer one message. Faults inside matching or rendering become the
    /// apology text with `AnswerKind::Failure`.
    pub fn answer(&self, raw: &str) -> ResponseResult {
        if raw.trim().is_empty() {
            return ResponseResult::canned(self.prompt.clone(), AnswerKind::Prompt);
        }
        match panic::catch_unwind(AssertUnwindSafe(|| self.try_answer(raw))) {
            Ok(Ok(result)) => {
                tracing::debug!(kind = ?result.kind, matched = ?result.matched, "answered");
                result
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "query failed");
                ResponseResult::canned(messages::APOLOGY, AnswerKind::Failure)
            }
            Err(_) => {
                tracing::error!("query panicked");
                ResponseResult::canned(messages::APOLOGY, AnswerKind::Failure)
            }
        }
    }

    /// Same call as [`answer`](Self::answer), for topic lookups by name.
    pub fn info(&self, topic: &str) -> ResponseResult {
        self.answer(topic)
    }

    /// Match diagnostics without rendering.
    pub fn explain(&self, raw: &str) -> anyhow::Result<MatchResult> {
        self.resolver.resolve(&self.resolver.normalize(raw), &self.lexicon)
    }

    fn try_answer(&self, raw: &str) -> anyhow::Result<ResponseResult> {
        let matched = self.explain(raw)?;
        let fallback = || ResponseResult::canned(messages::FALLBACK, AnswerKind::Fallback);
        let result = match matched.outcome {
            MatchOutcome::Empty => ResponseResult::canned(self.prompt.clone(), AnswerKind::Prompt),
            MatchOutcome::Greeting(key) => self
                .lexicon
                .greetings
                .get(&key)
                .map_or_else(fallback, |text| ResponseResult::canned(text.clone(), AnswerKind::Greeting)),
            MatchOutcome::SmallTalk(key) => self
                .lexicon
                .small_talk
                .get(&key)
                .map_or_else(fallback, |text| ResponseResult::canned(text.clone(), AnswerKind::SmallTalk)),
            MatchOutcome::Topic(topic) => match self.lexicon.topic(&topic) {
                Some(value) => ResponseResult::topic(self.renderer.render(&topic, value)?, topic),
                None => {
                    tracing::warn!(topic = %topic, "matched topic missing from lexicon");
                    fallback()
                }
            },
            MatchOutcome::NoMatch => fallback(),
        };
        Ok(result)
    }
}
