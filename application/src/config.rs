//! Application-level configuration.
//!
//! Controls how the decomposition use case assembles its extraction chain.

use multiedit_domain::DEFAULT_TARGET_WINDOW;

/// Decomposer behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposerConfig {
    /// Run the part-of-speech fallback when no template matches a clause.
    pub pos_fallback: bool,
    /// Tokens searched for the target color after the fallback's verb.
    pub target_window: usize,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            pos_fallback: true,
            target_window: DEFAULT_TARGET_WINDOW,
        }
    }
}

impl DecomposerConfig {
    /// Templates only; the tagger is never consulted.
    pub fn templates_only() -> Self {
        Self {
            pos_fallback: false,
            ..Self::default()
        }
    }

    pub fn with_target_window(mut self, window: usize) -> Self {
        self.target_window = window;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = DecomposerConfig::default();
        assert!(config.pos_fallback);
        assert_eq!(config.target_window, 5);
    }

    #[test]
    fn test_templates_only() {
        let config = DecomposerConfig::templates_only().with_target_window(3);
        assert!(!config.pos_fallback);
        assert_eq!(config.target_window, 3);
    }
}
