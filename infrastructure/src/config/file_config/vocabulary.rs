//! Vocabulary extension from TOML (`[vocabulary]` section)

use super::ConfigValidationError;
use multiedit_domain::{DomainError, Vocabulary, WordCategory};
use serde::{Deserialize, Serialize};

/// Extra words, added on top of the built-in lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVocabularyConfig {
    pub colors: Vec<String>,
    pub objects: Vec<String>,
    pub modifiers: Vec<String>,
}

impl FileVocabularyConfig {
    fn sections(&self) -> [(&'static str, WordCategory, &[String]); 3] {
        [
            ("colors", WordCategory::Color, self.colors.as_slice()),
            ("objects", WordCategory::Object, self.objects.as_slice()),
            ("modifiers", WordCategory::Modifier, self.modifiers.as_slice()),
        ]
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        for (section, _, words) in self.sections() {
            for word in words {
                let word = word.trim();
                if word.is_empty() {
                    errors.push(ConfigValidationError::BlankWord { section });
                } else if word.chars().any(char::is_whitespace) {
                    errors.push(ConfigValidationError::SpacedWord {
                        section,
                        word: word.to_string(),
                    });
                }
            }
        }
        errors
    }

    /// Add the configured words to `vocabulary`.
    pub fn apply(&self, vocabulary: Vocabulary) -> Result<Vocabulary, DomainError> {
        let mut vocabulary = vocabulary;
        for (_, category, words) in self.sections() {
            vocabulary = vocabulary.with_words(category, words)?;
        }
        Ok(vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_is_noop() {
        let vocab = FileVocabularyConfig::default()
            .apply(Vocabulary::default())
            .unwrap();
        assert_eq!(vocab.english().colors.len(), 16);
    }

    #[test]
    fn test_apply_rejects_blank_word() {
        let config = FileVocabularyConfig {
            modifiers: vec!["".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.apply(Vocabulary::default()),
            Err(DomainError::BlankWord)
        ));
    }
}
