//! Part-of-speech tagged tokens.

use serde::{Deserialize, Serialize};

/// One `(word, tag)` pair produced by a part-of-speech tagger.
///
/// Tags follow the common Chinese scheme where noun tags start with `n` and
/// verb tags with `v`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    pub fn is_nominal(&self) -> bool {
        self.tag.starts_with('n')
    }

    pub fn is_verbal(&self) -> bool {
        self.tag.starts_with('v')
    }
}
