//! Infrastructure layer for multiedit
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the jieba part-of-speech tagger and
//! configuration file loading.

pub mod config;
pub mod tagging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileFallbackConfig, FileOutputConfig,
    FileOutputFormat, FileVocabularyConfig,
};
pub use tagging::{JiebaTagger, TRANSFORM_VERBS};
