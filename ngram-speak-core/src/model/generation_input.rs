use super::ngram_model::NGramModel;
use crate::error::{Result, SpeakError};

/// Validated parameters of one generation request.
///
/// # Invariants
/// - `seed` is exactly `n-1` words long and is a context of the model
/// - `length` is at least `n`
///
/// Only obtainable through `GenerationInput::new`, so a `Generator` handed
/// one never has to deal with a bad request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	seed: Vec<String>,
	length: usize,
}

impl GenerationInput {
	/// Checks `seed` and `length` against `model`.
	///
	/// # Errors
	/// - `WrongSeedLength` if the seed is not `n-1` words long.
	/// - `UnseenContext` if the seed never occurs in the source text.
	/// - `LengthTooShort` if `length < n`.
	pub fn new(model: &NGramModel, seed: Vec<String>, length: usize) -> Result<Self> {
		let seed = validate_seed(model, seed)?;
		let length = validate_length(length, model.n())?;
		Ok(Self { seed, length })
	}

	pub fn seed(&self) -> &[String] {
		&self.seed
	}

	pub fn length(&self) -> usize {
		self.length
	}
}

/// Parses a decimal answer made of digits only (no sign, no fraction).
fn parse_positive(answer: &str) -> Result<usize> {
	let answer = answer.trim();
	if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
		return Err(SpeakError::InvalidNumericInput(answer.to_owned()));
	}
	answer
		.parse::<usize>()
		.map_err(|_| SpeakError::InvalidNumericInput(answer.to_owned()))
}

/// Parses the n-gram size answer.
///
/// # Errors
/// - `InvalidNumericInput` if the answer is not made of digits only.
/// - `InvalidNgramSize` if the size is below 2.
pub fn parse_ngram_size(answer: &str) -> Result<usize> {
	let n = parse_positive(answer)?;
	if n < 2 {
		return Err(SpeakError::InvalidNgramSize(n));
	}
	Ok(n)
}

/// Parses the starting words answer against `model`.
pub fn parse_seed(answer: &str, model: &NGramModel) -> Result<Vec<String>> {
	let seed = answer.split_whitespace().map(str::to_owned).collect();
	validate_seed(model, seed)
}

/// Parses the length answer for a model of order `n`.
pub fn parse_length(answer: &str, n: usize) -> Result<usize> {
	validate_length(parse_positive(answer)?, n)
}

fn validate_seed(model: &NGramModel, seed: Vec<String>) -> Result<Vec<String>> {
	if seed.len() != model.context_len() {
		return Err(SpeakError::WrongSeedLength { expected: model.context_len(), got: seed.len() });
	}
	if !model.contains(seed.as_slice()) {
		return Err(SpeakError::UnseenContext(seed));
	}
	Ok(seed)
}

fn validate_length(length: usize, n: usize) -> Result<usize> {
	if length < n {
		return Err(SpeakError::LengthTooShort { length, minimum: n });
	}
	Ok(length)
}
