//! Top-level module for the n-gram generation system.
//!
//! It provides:
//! - Word-level n-gram models (`NGramModel`)
//! - Internal per-context state (`State`)
//! - Validated generation parameters (`GenerationInput`)
//! - The generation loop (`Generator`)

/// Sliding-window generation over an `NGramModel`.
///
/// Picks each next word uniformly among the most common continuations
/// of the current context, with an injectable random source.
pub mod generator;

/// Validation of generation requests and of raw user answers.
pub mod generation_input;

/// Fixed-order word n-gram model (`n >= 2`).
///
/// Handles tokenization, window counting and context lookup.
pub mod ngram_model;

/// A single context and the words observed after it.
pub mod state;

pub use generation_input::GenerationInput;
pub use generator::{DEFAULT_TOP_K, Generation, Generator, Outcome};
pub use ngram_model::NGramModel;
pub use state::State;
