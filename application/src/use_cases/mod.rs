//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod decompose_instruction;
