//! English instruction extraction.
//!
//! A sentence is lower-cased, split on the words `and` / `then`, and each
//! fragment is matched once against a composite pattern:
//!
//! ```text
//! [prefix verb] [article] {modifier|color}* OBJECT VERB-PHRASE COLOR
//! ```
//!
//! The verb phrase is one of `to|into|become(s)|as`, `change|turn [it|them]
//! to|into`, or `make [it|them]`. The alternation order decides which shape
//! wins when several could match.

use crate::core::error::DomainError;
use crate::operation::{KeyedOperations, Operation};
use crate::vocabulary::{EnglishLexicon, Vocabulary};
use indexmap::IndexSet;
use regex::Regex;

/// Extracts recoloring operations from English sentences.
#[derive(Debug, Clone)]
pub struct EnglishExtractor {
    pattern: Regex,
    fragment_splitter: Regex,
    lexicon: EnglishLexicon,
}

fn alternation(words: &IndexSet<String>) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn build_pattern(lexicon: &EnglishLexicon) -> Result<Regex, DomainError> {
    let colors = alternation(&lexicon.colors);
    let objects = alternation(&lexicon.objects);
    let modifiers = alternation(&lexicon.modifiers);

    let source = format!(
        r"(?xi)
        (?:^|\b(?:and|make|turn|change|please|can\s+you\s+)?\s+)
        (?:the|this|that|a|an|it|them)?\s*
        (?P<prefix>(?:(?:{modifiers})\s+|(?:{colors})\s+)*)
        \b(?P<object>{objects})\b
        \s*
        (?:
            \s+(?:to|into|become|becomes?|\bas)\b
          | \s+(?:change|turn)(?:\s+(?:it|them))?\s+(?:to|into)\b
          | \s+make\b(?:\s+(?:it|them))?
          | make\b(?:\s+(?:it|them))?
        )\s+
        \b(?P<target>{colors})\b"
    );
    Ok(Regex::new(&source)?)
}

impl EnglishExtractor {
    /// Compile the pattern from the vocabulary's English lexicon.
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, DomainError> {
        let lexicon = vocabulary.english().clone();
        Ok(Self {
            pattern: build_pattern(&lexicon)?,
            fragment_splitter: Regex::new(r"\band\b|\bthen\b")?,
            lexicon,
        })
    }

    /// Extract every operation in an English sentence.
    ///
    /// At most one operation per `and`/`then` fragment. A later fragment
    /// with the same source replaces the earlier target in place.
    pub fn extract(&self, sentence: &str) -> Vec<Operation> {
        let text = sentence.to_lowercase().replace("grey", "gray");
        let mut operations = KeyedOperations::new();

        for fragment in self.fragment_splitter.split(&text) {
            if let Some(operation) = self.extract_fragment(fragment.trim()) {
                operations.record(operation);
            }
        }

        operations.into_operations()
    }

    /// Match one fragment. Returns `None` when nothing recognizable is there.
    pub fn extract_fragment(&self, fragment: &str) -> Option<Operation> {
        let captures = self.pattern.captures(fragment)?;
        let object = captures.name("object")?.as_str();
        let target = captures.name("target")?.as_str();
        let prefix = captures.name("prefix").map_or("", |m| m.as_str());

        let mut source_color = None;
        let mut parts: Vec<&str> = Vec::new();
        for token in prefix.split_whitespace() {
            if self.lexicon.is_color(token) {
                source_color = Some(token);
            } else {
                parts.push(token);
            }
        }
        parts.extend(source_color);
        parts.push(object);

        Some(Operation::new(parts.join(" "), target))
    }
}
