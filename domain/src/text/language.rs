//! Per-sentence language routing.

/// Which extractor a sentence is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// The whole sentence goes to the English extractor.
    English,
    /// The sentence is clause-split and each clause goes to the Chinese chain.
    Chinese,
}

impl Language {
    /// Any ASCII letter makes the sentence English, even if it also holds
    /// Chinese text.
    pub fn detect(sentence: &str) -> Self {
        if sentence.chars().any(|c| c.is_ascii_alphabetic()) {
            Language::English
        } else {
            Language::Chinese
        }
    }
}
