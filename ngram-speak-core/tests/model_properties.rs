// Properties of model construction and generation, checked over a handful
// of texts and orders rather than a single example.

use std::collections::{HashMap, HashSet};

use ngram_speak_core::model::{Generator, NGramModel, Outcome};
use rand::SeedableRng;
use rand::rngs::StdRng;

const TEXTS: [&str; 4] = [
	"the cat sat the cat ran the cat sat",
	"It was the best of times, it was the worst of times, it was the age of wisdom, \
	 it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity",
	"a a a a a b a a b b",
	"one",
];

/// Counts every (n-1)-word window prefix of `text` directly.
fn prefix_counts(text: &str, n: usize) -> HashMap<Vec<&str>, usize> {
	let tokens: Vec<&str> = text.split_whitespace().collect();
	let mut counts = HashMap::new();
	for window in tokens.windows(n) {
		*counts.entry(window[..n - 1].to_vec()).or_insert(0) += 1;
	}
	counts
}

#[test]
fn contexts_are_exactly_the_window_prefixes() {
	for text in TEXTS {
		for n in 2..=5 {
			let model = NGramModel::build(text, n).unwrap();
			let expected = prefix_counts(text, n);
			assert_eq!(model.len(), expected.len(), "n = {n}, text = {text:?}");

			let keys: HashSet<Vec<&str>> = model
				.contexts()
				.map(|context| context.iter().map(String::as_str).collect())
				.collect();
			let expected_keys: HashSet<Vec<&str>> = expected.keys().cloned().collect();
			assert_eq!(keys, expected_keys);
		}
	}
}

#[test]
fn counts_sum_to_context_occurrences() {
	for text in TEXTS {
		for n in 2..=5 {
			let model = NGramModel::build(text, n).unwrap();
			for (prefix, occurrences) in prefix_counts(text, n) {
				let state = model.following(&prefix[..]).unwrap();
				assert_eq!(state.total(), occurrences, "context {prefix:?}");
			}
		}
	}
}

#[test]
fn building_twice_gives_the_same_model() {
	for text in TEXTS {
		assert_eq!(NGramModel::build(text, 3).unwrap(), NGramModel::build(text, 3).unwrap());
	}
}

#[test]
fn generated_length_stays_within_bounds() {
	let generator = Generator::new();
	for text in TEXTS {
		for n in 2..=4 {
			let model = NGramModel::build(text, n).unwrap();
			let mut rng = StdRng::seed_from_u64(n as u64);
			let Some(seed) = model.random_context(&mut rng).map(<[String]>::to_vec) else {
				continue;
			};

			for target in [n - 1, n, n + 3, 50] {
				let generation = generator.generate(&model, &seed, target, &mut rng).unwrap();
				let len = generation.words().len();
				assert!(len >= seed.len() && len <= target);
				assert!(generation.words().starts_with(&seed));
				match generation.outcome() {
					Outcome::Completed => assert_eq!(len, target),
					Outcome::Exhausted { context } => {
						assert!(len < target);
						assert_eq!(context.as_slice(), &generation.words()[len - (n - 1)..]);
					}
				}
			}
		}
	}
}

#[test]
fn seeded_generation_is_reproducible() {
	let model = NGramModel::build(TEXTS[1], 2).unwrap();
	let generator = Generator::new();

	let run = |seed: u64| {
		let mut rng = StdRng::seed_from_u64(seed);
		generator.generate(&model, &["it"], 40, &mut rng).unwrap()
	};

	assert_eq!(run(1234), run(1234));
	assert_eq!(run(98), run(98));
}

#[test]
fn model_is_reusable_across_generations() {
	let model = NGramModel::build(TEXTS[0], 2).unwrap();
	let before = model.clone();
	let generator = Generator::new();
	let mut rng = StdRng::seed_from_u64(5);

	for _ in 0..10 {
		let generation = generator.generate(&model, &["the"], 4, &mut rng).unwrap();
		assert_eq!(&generation.words()[..2], ["the", "cat"]);
	}
	assert_eq!(model, before);
}

#[test]
fn dead_end_context_ends_generation_early() {
	// "end" only appears as the last word
	let model = NGramModel::build("start middle end", 3).unwrap();
	let mut rng = StdRng::seed_from_u64(0);
	let generation = Generator::new().generate(&model, &["start", "middle"], 10, &mut rng).unwrap();

	assert_eq!(generation.words(), ["start", "middle", "end"]);
	assert_eq!(
		generation.outcome(),
		&Outcome::Exhausted { context: vec!["middle".to_owned(), "end".to_owned()] }
	);
}
