use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeakError {
	#[error("File not found: {}", .0.display())]
	FileNotFound(PathBuf),

	#[error("Not a positive integer: {0:?}")]
	InvalidNumericInput(String),

	#[error("N-gram size must be greater than 1, got {0}")]
	InvalidNgramSize(usize),

	#[error("Length must be at least {minimum}, got {length}")]
	LengthTooShort { length: usize, minimum: usize },

	#[error("Expected {expected} starting words, got {got}")]
	WrongSeedLength { expected: usize, got: usize },

	#[error("Starting words not found in the text: {}", .0.join(" "))]
	UnseenContext(Vec<String>),

	#[error("top_k must be at least 1")]
	InvalidTopK,

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpeakError>;
