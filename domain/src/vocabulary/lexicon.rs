//! The [`Vocabulary`] value shared read-only by every extractor.

use super::builtin;
use crate::core::error::DomainError;
use indexmap::IndexSet;
use std::collections::HashSet;

/// Category a vocabulary word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCategory {
    Color,
    Object,
    Modifier,
}

/// Words the English pattern is compiled from.
///
/// Order matters: each list becomes a regex alternation.
#[derive(Debug, Clone)]
pub struct EnglishLexicon {
    pub colors: IndexSet<String>,
    pub objects: IndexSet<String>,
    pub modifiers: IndexSet<String>,
}

impl EnglishLexicon {
    pub fn is_color(&self, word: &str) -> bool {
        self.colors.contains(word)
    }
}

/// Recognized colors, object nouns and modifiers.
///
/// Built once, optionally extended, then handed to the extractors. Nothing
/// mutates it after an extractor has been constructed from it.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    colors: HashSet<String>,
    objects: HashSet<String>,
    modifiers: HashSet<String>,
    english: EnglishLexicon,
}

fn owned_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn owned_list(words: &[&str]) -> IndexSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            colors: owned_set(builtin::COLORS),
            objects: owned_set(builtin::OBJECTS),
            modifiers: owned_set(builtin::MODIFIERS),
            english: EnglishLexicon {
                colors: owned_list(builtin::ENGLISH_COLORS),
                objects: owned_list(builtin::ENGLISH_OBJECTS),
                modifiers: owned_list(builtin::ENGLISH_MODIFIERS),
            },
        }
    }
}

impl Vocabulary {
    pub fn is_color(&self, word: &str) -> bool {
        self.colors.contains(word)
    }

    pub fn is_object(&self, word: &str) -> bool {
        self.objects.contains(word)
    }

    pub fn is_modifier(&self, word: &str) -> bool {
        self.modifiers.contains(word)
    }

    pub fn english(&self) -> &EnglishLexicon {
        &self.english
    }

    /// All words of a category, in no particular order.
    pub fn words(&self, category: WordCategory) -> impl Iterator<Item = &str> {
        let set = match category {
            WordCategory::Color => &self.colors,
            WordCategory::Object => &self.objects,
            WordCategory::Modifier => &self.modifiers,
        };
        set.iter().map(String::as_str)
    }

    /// Add a word to a category.
    ///
    /// Purely alphabetic ASCII words are lower-cased and also join the
    /// English pattern. Words containing whitespace are rejected since the
    /// extractors tokenize on it.
    pub fn add_word(&mut self, category: WordCategory, word: &str) -> Result<(), DomainError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(DomainError::BlankWord);
        }
        if word.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidWord {
                word: word.to_string(),
                reason: "contains whitespace".to_string(),
            });
        }

        let english = word.chars().all(|c| c.is_ascii_alphabetic());
        let word = if english {
            word.to_ascii_lowercase()
        } else {
            word.to_string()
        };

        let (set, list) = match category {
            WordCategory::Color => (&mut self.colors, &mut self.english.colors),
            WordCategory::Object => (&mut self.objects, &mut self.english.objects),
            WordCategory::Modifier => (&mut self.modifiers, &mut self.english.modifiers),
        };
        if english {
            list.insert(word.clone());
        }
        set.insert(word);
        Ok(())
    }

    /// Builder-style variant of [`Vocabulary::add_word`] for several words.
    pub fn with_words<I, S>(mut self, category: WordCategory, words: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(category, word.as_ref())?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_contents() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_color("蓝"));
        assert!(vocab.is_color("grey"));
        assert!(vocab.is_object("立方体"));
        assert!(vocab.is_modifier("金属"));
        assert!(!vocab.is_color("立方体"));
        assert_eq!(vocab.english().colors.len(), 16);
        assert!(!vocab.english().is_color("grey"));
    }

    #[test]
    fn test_add_chinese_word_stays_out_of_english() {
        let vocab = Vocabulary::default()
            .with_words(WordCategory::Color, ["天蓝色"])
            .unwrap();
        assert!(vocab.is_color("天蓝色"));
        assert!(!vocab.english().colors.contains("天蓝色"));
    }

    #[test]
    fn test_add_english_word_is_lowercased() {
        let vocab = Vocabulary::default()
            .with_words(WordCategory::Object, ["  Pyramid "])
            .unwrap();
        assert!(vocab.is_object("pyramid"));
        assert_eq!(vocab.english().objects.last().map(String::as_str), Some("pyramid"));
    }

    #[test]
    fn test_add_duplicate_keeps_position() {
        let vocab = Vocabulary::default()
            .with_words(WordCategory::Color, ["red"])
            .unwrap();
        assert_eq!(vocab.english().colors.get_index_of("red"), Some(0));
        assert_eq!(vocab.english().colors.len(), 16);
    }

    #[test]
    fn test_reject_blank_and_spaced_words() {
        let mut vocab = Vocabulary::default();
        assert!(matches!(
            vocab.add_word(WordCategory::Modifier, "   "),
            Err(DomainError::BlankWord)
        ));
        assert!(matches!(
            vocab.add_word(WordCategory::Color, "sky blue"),
            Err(DomainError::InvalidWord { .. })
        ));
    }
}
