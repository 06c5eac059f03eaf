//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Extraction itself never fails; these only surface while building a
/// vocabulary or compiling the patterns derived from it.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Vocabulary word cannot be blank")]
    BlankWord,

    #[error("Invalid vocabulary word {word:?}: {reason}")]
    InvalidWord { word: String, reason: String },

    #[error("Failed to compile extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_word_display() {
        assert_eq!(
            DomainError::BlankWord.to_string(),
            "Vocabulary word cannot be blank"
        );
    }

    #[test]
    fn test_invalid_word_display() {
        let error = DomainError::InvalidWord {
            word: "red green".to_string(),
            reason: "contains whitespace".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid vocabulary word \"red green\": contains whitespace"
        );
    }
}
