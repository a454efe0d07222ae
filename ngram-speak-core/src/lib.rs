//! Word-level n-gram text generation library.
//!
//! This crate provides:
//! - An n-gram frequency model built from a source text (`NGramModel`)
//! - A sliding-window generator sampling among the most common continuations
//! - Validation of the parameters a generation request needs
//! - Small I/O helpers to load the source text
//!
//! The interactive front end lives in the `ngram-speak-cli` crate.

/// Error taxonomy shared by the model, the generator and the I/O helpers.
pub mod error;

/// Core n-gram model and generation logic.
pub mod model;

/// I/O utilities (source text loading).
pub mod io;

pub use error::{Result, SpeakError};
