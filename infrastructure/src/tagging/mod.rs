//! Part-of-speech tagger adapters for the Chinese fallback.

mod jieba;

pub use jieba::{JiebaTagger, TRANSFORM_VERBS};
