//! Canonical text form used for every comparison in the matcher.

use serde::{Deserialize, Serialize};

/// Character classes kept by [`normalize_with`].
///
/// With `unicode_letters` off, only ASCII letters and digits survive; any
/// other alphanumeric character is treated like punctuation and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    #[serde(default)]
    pub unicode_letters: bool,
}

impl NormalizeOptions {
    fn keeps(self, c: char) -> bool {
        if self.unicode_letters {
            c.is_alphanumeric()
        } else {
            c.is_ascii_alphanumeric()
        }
    }
}

/// Lowercase, strip punctuation and collapse whitespace (ASCII classes).
pub fn normalize(text: &str) -> String {
    normalize_with(text, NormalizeOptions::default())
}

pub fn normalize_with(text: &str, options: NormalizeOptions) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else if options.keeps(c) {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}
