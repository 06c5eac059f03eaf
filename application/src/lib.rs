//! Application layer for multiedit
//!
//! This crate contains the decomposition use case, the extraction strategy
//! chain, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DecomposerConfig;
pub use ports::pos_tagger::{PosTagger, TaggerError};
pub use use_cases::decompose_instruction::{
    DecomposeInstructionUseCase, DecomposerBuildError,
    strategy::{
        ExtractionStrategy, PosFallbackStrategy, StrategyOutcome, TemplateStrategy, run_chain,
    },
};
