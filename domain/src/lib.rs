//! Domain layer for multiedit
//!
//! This crate contains the decomposition rules: vocabulary, operations,
//! text segmentation and the extractors. It performs no I/O and has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Pipeline
//!
//! ```text
//! normalize → split_sentences → Language::detect
//!     English: EnglishExtractor
//!     Chinese: split_clauses → match_templates, else scan_tagged
//! → OperationList::assemble → DecompositionReport
//! ```
//!
//! The Chinese fallback needs a part-of-speech tagger; that capability is a
//! port of the application layer, so this crate only consumes its output
//! ([`TaggedWord`]).

pub mod config;
pub mod core;
pub mod extraction;
pub mod operation;
pub mod report;
pub mod text;
pub mod vocabulary;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use extraction::{
    DEFAULT_TARGET_WINDOW, EnglishExtractor, TaggedWord, match_templates, scan_tagged,
};
pub use operation::{KeyedOperations, Operation, OperationList};
pub use report::DecompositionReport;
pub use text::{Language, normalize, split_clauses, split_sentences};
pub use vocabulary::{Vocabulary, WordCategory};
