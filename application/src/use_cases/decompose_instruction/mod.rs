//! Decompose Instruction use case
//!
//! Runs the full pipeline over one instruction:
//!
//! 1. Normalize the text and split it into sentences
//! 2. Route each sentence: English sentences go whole to the English
//!    extractor, Chinese sentences are clause-split and each clause runs
//!    through the strategy chain
//! 3. Concatenate per-sentence results in input order, strip leftover
//!    markers and deduplicate into an [`OperationList`]

pub mod strategy;

use crate::config::DecomposerConfig;
use crate::ports::pos_tagger::PosTagger;
use multiedit_domain::{
    DecompositionReport, DomainError, EnglishExtractor, Language, Operation, OperationList,
    Vocabulary, normalize, split_clauses, split_sentences,
};
use std::sync::Arc;
use strategy::{ExtractionStrategy, PosFallbackStrategy, TemplateStrategy, run_chain};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building the use case
#[derive(Error, Debug)]
pub enum DecomposerBuildError {
    #[error("Invalid target window: must be at least 1")]
    InvalidTargetWindow,

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Use case for decomposing compound recoloring instructions
///
/// Holds only read-only state after construction, so one instance can serve
/// any number of calls, from any thread.
pub struct DecomposeInstructionUseCase {
    english: EnglishExtractor,
    chinese: Vec<Box<dyn ExtractionStrategy>>,
}

impl DecomposeInstructionUseCase {
    /// Build the extractors from a vocabulary and inject the tagger used by
    /// the Chinese fallback.
    pub fn new<T: PosTagger + 'static>(
        tagger: T,
        vocabulary: Vocabulary,
        config: DecomposerConfig,
    ) -> Result<Self, DecomposerBuildError> {
        if config.target_window == 0 {
            return Err(DecomposerBuildError::InvalidTargetWindow);
        }

        let english = EnglishExtractor::new(&vocabulary)?;
        let vocabulary = Arc::new(vocabulary);

        let mut chinese: Vec<Box<dyn ExtractionStrategy>> =
            vec![Box::new(TemplateStrategy::new(Arc::clone(&vocabulary)))];
        if config.pos_fallback {
            chinese.push(Box::new(PosFallbackStrategy::new(
                tagger,
                vocabulary,
                config.target_window,
            )));
        }

        Ok(Self { english, chinese })
    }

    /// Decompose an instruction into ordered, unique operations
    pub fn decompose(&self, instruction: &str) -> OperationList {
        let normalized = normalize(instruction);
        let mut raw: Vec<Operation> = Vec::new();

        for sentence in split_sentences(&normalized) {
            match Language::detect(sentence) {
                Language::English => {
                    let ops = self.english.extract(sentence);
                    debug!("English sentence {:?}: {} operation(s)", sentence, ops.len());
                    raw.extend(ops);
                }
                Language::Chinese => {
                    for clause in split_clauses(sentence) {
                        let ops = run_chain(&self.chinese, clause);
                        debug!("Chinese clause {:?}: {} operation(s)", clause, ops.len());
                        raw.extend(ops);
                    }
                }
            }
        }

        let operations = OperationList::assemble(raw);
        debug!("Decomposed into {} operation(s)", operations.len());
        operations
    }

    /// Decompose and render each operation as `"source → target"`
    pub fn decompose_instruction(&self, instruction: &str) -> Vec<String> {
        self.decompose(instruction).rendered()
    }

    /// Decompose and build the numbered report
    ///
    /// When nothing is recognized the report text is the original
    /// instruction, unchanged.
    pub fn generate_report(&self, instruction: &str) -> DecompositionReport {
        DecompositionReport::build(instruction, self.decompose(instruction))
    }

    /// `(report text, rendered operations)` for an instruction
    pub fn generate_decomposed_instruction(&self, instruction: &str) -> (String, Vec<String>) {
        self.generate_report(instruction).into_parts()
    }
}
