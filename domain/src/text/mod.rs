//! Text preparation: normalization, segmentation and language routing.

pub mod language;
pub mod normalize;
pub mod segment;

pub use language::Language;
pub use normalize::normalize;
pub use segment::{split_clauses, split_sentences};
