//! Recoloring operations and the collections that order and deduplicate them.

pub mod entities;
pub mod keyed;
pub mod list;

pub use entities::{Operation, SEPARATOR};
pub use keyed::KeyedOperations;
pub use list::OperationList;
