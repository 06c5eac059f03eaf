//! The deduplicated, ordered result of a decomposition.

use super::entities::Operation;
use indexmap::IndexSet;
use serde::Serialize;

/// Ordered, duplicate-free sequence of operations.
///
/// Order is first-seen order; uniqueness is on the `(source, target)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OperationList {
    operations: IndexSet<Operation>,
}

impl OperationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge raw per-clause operations into one list.
    ///
    /// Leading object markers are stripped before comparing, so `把红球 → 蓝`
    /// and `红球 → 蓝` collapse into the first one seen.
    pub fn assemble<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        let mut list = Self::new();
        for operation in raw.into_iter().filter_map(Operation::without_marker) {
            list.push(operation);
        }
        list
    }

    /// Append unless the same pair is already present. Returns whether it
    /// was added.
    pub fn push(&mut self, operation: Operation) -> bool {
        self.operations.insert(operation)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    /// Rendered `"source → target"` strings, in order.
    pub fn rendered(&self) -> Vec<String> {
        self.operations.iter().map(Operation::render).collect()
    }
}

impl<'a> IntoIterator for &'a OperationList {
    type Item = &'a Operation;
    type IntoIter = indexmap::set::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
