//! Per-clause collection keyed by source phrase.

use super::entities::Operation;
use indexmap::IndexMap;

/// Operations recorded while scanning one clause or sentence.
///
/// Keyed by source phrase: recording a source again replaces its target but
/// keeps the position where the source was first seen.
#[derive(Debug, Default)]
pub struct KeyedOperations {
    by_source: IndexMap<String, Operation>,
}

impl KeyedOperations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: Operation) {
        // IndexMap::insert on an existing key keeps its index.
        self.by_source
            .insert(operation.source().to_string(), operation);
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.by_source.into_values().collect()
    }
}
