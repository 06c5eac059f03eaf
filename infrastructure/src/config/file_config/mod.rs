//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod fallback;
mod output;
mod vocabulary;

pub use fallback::FileFallbackConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use vocabulary::FileVocabularyConfig;

use multiedit_application::DecomposerConfig;
use multiedit_domain::{DomainError, Vocabulary};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("fallback.target_window cannot be 0")]
    InvalidTargetWindow,

    #[error("vocabulary.{section} contains a blank word")]
    BlankWord { section: &'static str },

    #[error("vocabulary.{section}: '{word}' contains whitespace")]
    SpacedWord { section: &'static str, word: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Extra words merged into the built-in vocabulary
    pub vocabulary: FileVocabularyConfig,
    /// Tagger fallback settings
    pub fallback: FileFallbackConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected problem.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        if self.fallback.target_window == 0 {
            errors.push(ConfigValidationError::InvalidTargetWindow);
        }
        errors.extend(self.vocabulary.validate());
        errors
    }

    /// Built-in vocabulary extended with the configured words
    pub fn build_vocabulary(&self) -> Result<Vocabulary, DomainError> {
        self.vocabulary.apply(Vocabulary::default())
    }

    pub fn decomposer_config(&self) -> DecomposerConfig {
        DecomposerConfig {
            pos_fallback: self.fallback.enabled,
            target_window: self.fallback.target_window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiedit_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[vocabulary]
colors = ["天蓝色", "teal"]
objects = ["四棱锥"]
modifiers = ["透明"]

[fallback]
enabled = false
target_window = 3

[output]
format = "list"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.vocabulary.colors, vec!["天蓝色", "teal"]);
        assert_eq!(config.vocabulary.objects, vec!["四棱锥"]);
        assert!(!config.fallback.enabled);
        assert_eq!(config.fallback.target_window, 3);
        assert_eq!(config.output.format, Some(OutputFormat::List));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[fallback]
target_window = 8
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fallback.target_window, 8);
        // Defaults should apply
        assert!(config.fallback.enabled);
        assert!(config.vocabulary.colors.is_empty());
        assert!(config.output.color);
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.decomposer_config(), DecomposerConfig::default());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let toml_str = r#"
[vocabulary]
colors = [" "]
objects = ["big box"]

[fallback]
target_window = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::InvalidTargetWindow,
                ConfigValidationError::BlankWord { section: "colors" },
                ConfigValidationError::SpacedWord {
                    section: "objects",
                    word: "big box".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_build_vocabulary() {
        let toml_str = r#"
[vocabulary]
colors = ["Teal"]
objects = ["四棱锥"]
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let vocab = config.build_vocabulary().unwrap();
        assert!(vocab.is_color("teal"));
        assert!(vocab.english().is_color("teal"));
        assert!(vocab.is_object("四棱锥"));
        assert!(vocab.is_color("红"));
    }

    #[test]
    fn test_decomposer_config_mapping() {
        let mut config = FileConfig::default();
        config.fallback.enabled = false;
        config.fallback.target_window = 2;
        assert_eq!(
            config.decomposer_config(),
            DecomposerConfig {
                pos_fallback: false,
                target_window: 2,
            }
        );
    }
}
