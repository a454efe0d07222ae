use log::{debug, info, trace};
use rand::Rng;

use super::generation_input::GenerationInput;
use super::ngram_model::NGramModel;
use crate::error::{Result, SpeakError};

/// Number of most common following words a step picks from by default.
pub const DEFAULT_TOP_K: usize = 20;

/// How a generation ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// The requested length was reached.
	Completed,
	/// The walk reached a context with no recorded continuation and
	/// stopped before the requested length.
	Exhausted { context: Vec<String> },
}

/// Result of a generation: the seed followed by the generated words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	words: Vec<String>,
	outcome: Outcome,
}

impl Generation {
	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn into_words(self) -> Vec<String> {
		self.words
	}

	pub fn outcome(&self) -> &Outcome {
		&self.outcome
	}

	/// `true` if the generation stopped short of the requested length.
	pub fn is_exhausted(&self) -> bool {
		matches!(self.outcome, Outcome::Exhausted { .. })
	}

	/// Words joined with single spaces.
	pub fn text(&self) -> String {
		self.words.join(" ")
	}
}

/// Word generator walking an `NGramModel`.
///
/// # Behavior
/// - Starts from the seed words, which must be a context of the model
/// - At each step, looks up the last `n-1` words, takes the `top_k` most
///   common following words and picks one of them uniformly at random
/// - Stops at the requested length, or earlier if the current context
///   has no continuation
///
/// The random source is a parameter so callers can use a seeded generator
/// and get reproducible output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generator {
	top_k: usize,
}

impl Default for Generator {
	fn default() -> Self {
		Self { top_k: DEFAULT_TOP_K }
	}
}

impl Generator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a generator picking among the `top_k` most common words.
	///
	/// # Errors
	/// Returns an error if `top_k` is 0.
	pub fn with_top_k(top_k: usize) -> Result<Self> {
		if top_k == 0 {
			return Err(SpeakError::InvalidTopK);
		}
		Ok(Self { top_k })
	}

	pub fn top_k(&self) -> usize {
		self.top_k
	}

	/// Generates from a validated `GenerationInput`.
	pub fn generate_from<R: Rng + ?Sized>(
		&self,
		model: &NGramModel,
		input: &GenerationInput,
		rng: &mut R,
	) -> Result<Generation> {
		self.generate(model, input.seed(), input.length(), rng)
	}

	/// Generates up to `target_length` words, seed included.
	///
	/// # Parameters
	/// - `seed`: exactly `n-1` starting words.
	/// - `target_length`: total number of words wanted (`>= n-1`).
	///
	/// # Returns
	/// The seed followed by the generated words. The result is shorter than
	/// `target_length` only when the outcome is `Outcome::Exhausted`.
	///
	/// # Errors
	/// - `WrongSeedLength` if the seed is not `n-1` words long.
	/// - `LengthTooShort` if `target_length < n-1`.
	///
	/// # Notes
	/// - An unseen seed is not an error: the generation is exhausted
	///   right away and only the seed is returned.
	pub fn generate<S: AsRef<str>, R: Rng + ?Sized>(
		&self,
		model: &NGramModel,
		seed: &[S],
		target_length: usize,
		rng: &mut R,
	) -> Result<Generation> {
		let context_len = model.context_len();
		if seed.len() != context_len {
			return Err(SpeakError::WrongSeedLength { expected: context_len, got: seed.len() });
		}
		if target_length < context_len {
			return Err(SpeakError::LengthTooShort { length: target_length, minimum: context_len });
		}

		let mut words: Vec<String> = seed.iter().map(|w| w.as_ref().to_owned()).collect();
		words.reserve(target_length - context_len);

		for _ in 0..target_length - context_len {
			// Current context: always the last n-1 generated words
			let window = &words[words.len() - context_len..];
			let next_word = model
				.following(window)
				.and_then(|state| state.predict(self.top_k, rng));

			let Some(next_word) = next_word else {
				let context = window.to_vec();
				info!(
					"No continuation for \"{}\", stopping at {} of {} words",
					context.join(" "),
					words.len(),
					target_length
				);
				return Ok(Generation { words, outcome: Outcome::Exhausted { context } });
			};

			trace!("{:?} -> {:?}", window, next_word);
			words.push(next_word.to_owned());
		}

		debug!("Generated {} words", words.len());
		Ok(Generation { words, outcome: Outcome::Completed })
	}
}
