use std::collections::HashMap;

use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::State;
use crate::error::{Result, SpeakError};

/// Represents a word-level n-gram model.
///
/// The `NGramModel` stores a state for every context (the first `n-1`
/// words of an n-gram) met in the source text, together with the words
/// observed right after it.
///
/// # Responsibilities
/// - Split a text into words and slide a window of `n` words over it
/// - Accumulate following-word counts for each context
/// - Answer lookups for a given context
///
/// # Invariants
/// - `n` is always >= 2
/// - Keys are exactly the distinct contexts of the source text
/// - For each context, counts sum to the number of times it occurred
/// - The model is never modified once built
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NGramModel {
	/// The order of the model (number of words in the n-gram)
	n: usize, // must be >= 2

	/// Mapping from a context (length n-1) to its corresponding state
	states: HashMap<Vec<String>, State>,
}

impl NGramModel {
	/// Builds the model of order `n` from a raw text.
	///
	/// Words are whitespace-delimited and kept as-is (case and punctuation
	/// included). A text with fewer than `n` words yields an empty model.
	///
	/// # Errors
	/// Returns an error if `n < 2`.
	pub fn build(text: &str, n: usize) -> Result<Self> {
		let mut model = Self::new(n)?;
		let tokens: Vec<&str> = text.split_whitespace().collect();
		model.add_tokens(&tokens);

		info!(
			"Built {}-gram model: {} words, {} contexts",
			n,
			tokens.len(),
			model.len()
		);
		Ok(model)
	}

	/// Creates an empty model of order `n`.
	fn new(n: usize) -> Result<Self> {
		if n < 2 {
			return Err(SpeakError::InvalidNgramSize(n));
		}
		Ok(Self { n, states: HashMap::new() })
	}

	/// Updates the states with every window of `n` tokens.
	fn add_tokens(&mut self, tokens: &[&str]) {
		if tokens.len() < self.n {
			debug!("{} words is too short for n = {}, no n-grams", tokens.len(), self.n);
			return;
		}

		for window in tokens.windows(self.n) {
			let (context, next_word) = window.split_at(self.n - 1);
			let key: Vec<String> = context.iter().map(|w| (*w).to_owned()).collect();

			self.states
				.entry(key)
				.or_insert_with_key(|key| State::new(key))
				.add_transition(next_word[0]);
		}
	}

	/// The order of the model.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Number of words a context is made of (`n - 1`).
	pub fn context_len(&self) -> usize {
		self.n - 1
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns `true` if `context` was seen in the source text.
	pub fn contains<S: AsRef<str>>(&self, context: &[S]) -> bool {
		self.following(context).is_some()
	}

	/// Returns the following-word distribution of `context`, if seen.
	pub fn following<S: AsRef<str>>(&self, context: &[S]) -> Option<&State> {
		let key: Vec<String> = context.iter().map(|w| w.as_ref().to_owned()).collect();
		self.states.get(&key)
	}

	/// Iterates over all contexts, in no particular order.
	pub fn contexts(&self) -> impl Iterator<Item = &[String]> {
		self.states.keys().map(Vec::as_slice)
	}

	/// Returns a random context of the model.
	///
	/// Useful to suggest starting words. Contexts are drawn from their
	/// sorted order, so a seeded `rng` gives the same context every run.
	/// Returns `None` if the model has no states.
	pub fn random_context<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&[String]> {
		let mut contexts: Vec<&[String]> = self.contexts().collect();
		contexts.sort_unstable();
		contexts.choose(rng).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const CAT_TEXT: &str = "the cat sat the cat ran the cat sat";

	#[test]
	fn rejects_n_below_two() {
		assert!(matches!(NGramModel::build(CAT_TEXT, 1), Err(SpeakError::InvalidNgramSize(1))));
		assert!(matches!(NGramModel::build(CAT_TEXT, 0), Err(SpeakError::InvalidNgramSize(0))));
	}

	#[test]
	fn bigram_counts() {
		let model = NGramModel::build(CAT_TEXT, 2).unwrap();
		assert_eq!(model.n(), 2);
		assert_eq!(model.context_len(), 1);
		assert_eq!(model.len(), 4);

		let the = model.following(&["the"]).unwrap();
		assert_eq!(the.len(), 1);
		assert_eq!(the.count("cat"), 3);

		let cat = model.following(&["cat"]).unwrap();
		assert_eq!(cat.count("sat"), 2);
		assert_eq!(cat.count("ran"), 1);
		assert_eq!(cat.total(), 3);

		// The final "sat" has no continuation
		assert_eq!(model.following(&["sat"]).unwrap().count("the"), 1);
	}

	#[test]
	fn trigram_contexts_are_word_pairs() {
		let model = NGramModel::build(CAT_TEXT, 3).unwrap();
		assert!(model.contains(&["the", "cat"]));
		assert!(!model.contains(&["the"]));
		assert!(!model.contains(&["cat", "the"]));
		assert_eq!(model.following(&["the", "cat"]).unwrap().total(), 3);
	}

	#[test]
	fn tokens_are_not_normalized() {
		let model = NGramModel::build("The cat, the cat.", 2).unwrap();
		assert!(model.contains(&["The"]));
		assert!(model.contains(&["cat,"]));
		assert_eq!(model.following(&["the"]).unwrap().count("cat."), 1);
		assert!(!model.contains(&["cat."]));
	}

	#[test]
	fn whitespace_runs_are_a_single_separator() {
		let model = NGramModel::build("  a\t\tb \n\n c  ", 2).unwrap();
		assert_eq!(model.len(), 2);
		assert_eq!(model.following(&["a"]).unwrap().count("b"), 1);
		assert_eq!(model.following(&["b"]).unwrap().count("c"), 1);
	}

	#[test]
	fn short_text_gives_empty_model() {
		assert!(NGramModel::build("", 2).unwrap().is_empty());
		assert!(NGramModel::build("one two", 3).unwrap().is_empty());
		assert_eq!(NGramModel::build("one two three", 3).unwrap().len(), 1);
	}

	#[test]
	fn random_context_only_depends_on_the_rng() {
		// Each build gets its own hash seed, so key iteration order may differ
		let text = "a b c d e f g h i j k l m n o p q r s t u v w x y z";
		for seed in 0..20 {
			let first = NGramModel::build(text, 3).unwrap();
			let second = NGramModel::build(text, 3).unwrap();
			assert_eq!(
				first.random_context(&mut StdRng::seed_from_u64(seed)),
				second.random_context(&mut StdRng::seed_from_u64(seed))
			);
		}
	}

	#[test]
	fn random_context_is_a_key() {
		let model = NGramModel::build(CAT_TEXT, 3).unwrap();
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..20 {
			let context = model.random_context(&mut rng).unwrap();
			assert!(model.contains(context));
		}

		let empty = NGramModel::build("", 3).unwrap();
		assert_eq!(empty.random_context(&mut rng), None);
	}
}
