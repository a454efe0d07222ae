use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Default display width, in columns.
pub const DEFAULT_WIDTH: usize = 80;

/// Joins `words` with single spaces and wraps the result to `width` columns.
///
/// Lines are only broken at spaces: a word longer than `width` is left on
/// its own line rather than split, and tokens such as `and/or` stay whole.
pub fn wrap_words<S: AsRef<str>>(words: &[S], width: usize) -> String {
	let text = words.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ");
	let options = Options::new(width)
		.word_separator(WordSeparator::AsciiSpace)
		.break_words(false)
		.word_splitter(WordSplitter::NoHyphenation)
		.wrap_algorithm(WrapAlgorithm::FirstFit);
	textwrap::fill(&text, options)
}
