use std::cmp::Reverse;
use std::collections::HashMap;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents a context of an n-gram model.
///
/// A `State` corresponds to a fixed (n-1)-word context (`key`) and stores
/// every word observed right after it, with its number of observations.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate following-word occurrences during construction
/// - Rank following words by frequency
/// - Pick the next word uniformly among the most common ones
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// The (n-1)-word context.
	key: Vec<String>,
	/// Following words indexed by word.
	/// Example: { "cat" => 3, "dog" => 1 }
	transitions: HashMap<String, usize>,
}

impl State {
	/// Creates a new empty state for the given context.
	pub fn new(key: &[String]) -> Self {
		Self {
			key: key.to_vec(),
			transitions: HashMap::new(),
		}
	}

	/// The context this state stands for.
	pub fn key(&self) -> &[String] {
		&self.key
	}

	/// Records one occurrence of `next_word` after this context.
	pub fn add_transition(&mut self, next_word: &str) {
		if let Some(occurrence) = self.transitions.get_mut(next_word) {
			*occurrence += 1;
		} else {
			self.transitions.insert(next_word.to_owned(), 1);
		}
	}

	/// Number of times `word` was observed after this context.
	pub fn count(&self, word: &str) -> usize {
		self.transitions.get(word).copied().unwrap_or(0)
	}

	/// Number of distinct following words.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Total number of observations, i.e. how many times the context occurred.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Iterates over `(word, count)` pairs in no particular order.
	pub fn transitions(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Returns the `limit` most common following words.
	///
	/// Words are ranked by count (descending); equal counts are ordered
	/// lexically so the cut at `limit` is always the same for a given state.
	pub fn most_common(&self, limit: usize) -> Vec<(&str, usize)> {
		let mut ranked: Vec<(&str, usize)> = self.transitions().collect();
		ranked.sort_unstable_by_key(|&(word, count)| (Reverse(count), word));
		ranked.truncate(limit);
		ranked
	}

	/// Picks the next word uniformly among the `top_k` most common ones.
	///
	/// Frequencies only decide membership of the candidate set, not the
	/// probability of each candidate.
	///
	/// Returns `None` if the state has no transitions.
	pub fn predict<R: Rng + ?Sized>(&self, top_k: usize, rng: &mut R) -> Option<&str> {
		self.most_common(top_k)
			.choose(rng)
			.map(|&(word, _)| word)
	}
}
