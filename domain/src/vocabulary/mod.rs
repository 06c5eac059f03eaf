//! Recognized words and the fixed token sets the pipeline splits on.

pub mod builtin;
mod lexicon;

pub use lexicon::{EnglishLexicon, Vocabulary, WordCategory};
