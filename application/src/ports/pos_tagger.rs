//! Part-of-speech tagger port
//!
//! Defines the capability the Chinese fallback needs: turning a clause into
//! `(word, tag)` pairs.

use multiedit_domain::TaggedWord;
use thiserror::Error;

/// Errors a tagger adapter may report.
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Tagging failed: {0}")]
    Failed(String),

    #[error("Tagger crashed: {0}")]
    Crashed(String),
}

/// Port for part-of-speech tagging
///
/// Implementations (adapters) live in the infrastructure layer. Noun tags
/// must start with `n` and verb tags with `v`; any tagger honoring that is
/// substitutable.
pub trait PosTagger: Send + Sync {
    /// Short name used in log messages
    fn name(&self) -> &str {
        "tagger"
    }

    /// Segment and tag a clause
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggerError>;
}

impl<T: PosTagger + ?Sized> PosTagger for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggerError> {
        (**self).tag(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct WhitespaceTagger;

    impl PosTagger for WhitespaceTagger {
        fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggerError> {
            Ok(text
                .split_whitespace()
                .map(|w| TaggedWord::new(w, "n"))
                .collect())
        }
    }

    #[test]
    fn test_default_name() {
        assert_eq!(WhitespaceTagger.name(), "tagger");
    }

    #[test]
    fn test_arc_forwards() {
        let tagger = Arc::new(WhitespaceTagger);
        let words = tagger.tag("红 球").unwrap();
        assert_eq!(words, vec![TaggedWord::new("红", "n"), TaggedWord::new("球", "n")]);
    }

    #[test]
    fn test_error_display() {
        let error = TaggerError::Crashed("index out of bounds".to_string());
        assert_eq!(error.to_string(), "Tagger crashed: index out of bounds");
    }
}
