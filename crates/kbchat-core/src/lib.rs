#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use normalize::{normalize, NormalizeOptions};
pub use types::{AnswerKind, Lexicon, MatchOutcome, MatchResult, ResponseResult, Strategy, TopicValue};
