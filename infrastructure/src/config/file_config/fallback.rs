//! Tagger fallback configuration from TOML (`[fallback]` section)

use multiedit_application::DecomposerConfig;
use serde::{Deserialize, Serialize};

/// Raw fallback configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFallbackConfig {
    /// Run the part-of-speech scan on clauses no template matched
    pub enabled: bool,
    /// Tokens after the verb searched for the target color
    pub target_window: usize,
}

impl Default for FileFallbackConfig {
    fn default() -> Self {
        let defaults = DecomposerConfig::default();
        Self {
            enabled: defaults.pos_fallback,
            target_window: defaults.target_window,
        }
    }
}
