//! Extraction strategies for Chinese clauses.
//!
//! The Chinese extractor is an ordered chain: each strategy either claims the
//! clause (non-empty result) or passes it on. Templates come first, the
//! tagger-driven scan second.

use crate::ports::pos_tagger::{PosTagger, TaggerError};
use multiedit_domain::{Operation, TaggedWord, Vocabulary, match_templates, scan_tagged};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{trace, warn};

/// Result of running one strategy on a clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyOutcome {
    pub matched: bool,
    pub operations: Vec<Operation>,
}

impl StrategyOutcome {
    pub fn from_operations(operations: Vec<Operation>) -> Self {
        Self {
            matched: !operations.is_empty(),
            operations,
        }
    }

    pub fn unmatched() -> Self {
        Self::default()
    }
}

/// One link of the clause extraction chain.
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, clause: &str) -> StrategyOutcome;
}

/// Run strategies in order and keep the first non-empty result.
pub fn run_chain(strategies: &[Box<dyn ExtractionStrategy>], clause: &str) -> Vec<Operation> {
    for strategy in strategies {
        let outcome = strategy.extract(clause);
        if outcome.matched {
            trace!(
                "{} matched {} operation(s) in {:?}",
                strategy.name(),
                outcome.operations.len(),
                clause
            );
            return outcome.operations;
        }
    }
    trace!("No strategy matched {:?}", clause);
    Vec::new()
}

/// Literal transformation templates (`把X变成Y`, `将X改为Y`, ...).
pub struct TemplateStrategy {
    vocabulary: Arc<Vocabulary>,
}

impl TemplateStrategy {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }
}

impl ExtractionStrategy for TemplateStrategy {
    fn name(&self) -> &'static str {
        "templates"
    }

    fn extract(&self, clause: &str) -> StrategyOutcome {
        StrategyOutcome::from_operations(match_templates(clause, &self.vocabulary))
    }
}

/// Tagger-driven `color+phrase … verb … color` scan.
///
/// Tagger failures are contained here, whether the tagger returns an error
/// or panics: the clause yields nothing and the failure is logged.
pub struct PosFallbackStrategy<T: PosTagger> {
    tagger: T,
    vocabulary: Arc<Vocabulary>,
    target_window: usize,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl<T: PosTagger> PosFallbackStrategy<T> {
    pub fn new(tagger: T, vocabulary: Arc<Vocabulary>, target_window: usize) -> Self {
        Self {
            tagger,
            vocabulary,
            target_window,
        }
    }

    /// Tag a clause, turning a panic inside the tagger into
    /// [`TaggerError::Crashed`].
    fn tag_guarded(&self, clause: &str) -> Result<Vec<TaggedWord>, TaggerError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.tagger.tag(clause)))
            .unwrap_or_else(|payload| Err(TaggerError::Crashed(panic_message(payload.as_ref()))))
    }
}

impl<T: PosTagger> ExtractionStrategy for PosFallbackStrategy<T> {
    fn name(&self) -> &'static str {
        "pos-fallback"
    }

    fn extract(&self, clause: &str) -> StrategyOutcome {
        let words = match self.tag_guarded(clause) {
            Ok(words) => words,
            Err(e) => {
                warn!("{} failed on {:?}: {}", self.tagger.name(), clause, e);
                return StrategyOutcome::unmatched();
            }
        };

        let words: Vec<TaggedWord> = words
            .into_iter()
            .filter(|w| !w.word.trim().is_empty())
            .collect();

        StrategyOutcome::from_operations(scan_tagged(
            &words,
            &self.vocabulary,
            self.target_window,
        ))
    }
}
