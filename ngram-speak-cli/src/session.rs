use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::{debug, info};
use rand::Rng;

use ngram_speak_core::io::{is_file, read_text};
use ngram_speak_core::model::generation_input::{parse_length, parse_ngram_size, parse_seed};
use ngram_speak_core::model::{GenerationInput, Generator, NGramModel};
use ngram_speak_core::{Result, SpeakError};

use crate::render::{DEFAULT_WIDTH, wrap_words};

/// One interactive session: pick a file and an n-gram size, then generate
/// text from starting words as many times as wanted.
///
/// # Behavior
/// - Bad answers are reported and asked again, never fatal
/// - Entering `q` at the file prompt, or reaching end of input at any
///   prompt, ends the session
/// - The model is built once per (file, n) and reused for every "try again"
pub struct Session<I, O, R> {
	input: I,
	output: O,
	generator: Generator,
	rng: R,
	width: usize,
}

impl<I: BufRead, O: Write, R: Rng> Session<I, O, R> {
	pub fn new(input: I, output: O, generator: Generator, rng: R) -> Self {
		Self { input, output, generator, rng, width: DEFAULT_WIDTH }
	}

	/// Sets the column width generated text is wrapped to.
	pub fn with_width(mut self, width: usize) -> Self {
		self.width = width;
		self
	}

	/// Runs the session until the user quits or input ends.
	///
	/// # Errors
	/// Only terminal I/O failures end the session with an error.
	pub fn run(&mut self) -> Result<()> {
		writeln!(self.output, "Welcome to N-Gram Speak!\n")?;

		loop {
			let Some(path) = self.ask_file()? else { return Ok(()) };
			writeln!(self.output)?;

			let Some(n) = self.ask_ngram_size()? else { return Ok(()) };
			writeln!(self.output, "\nGenerating n-grams...\n")?;

			let text = match read_text(&path) {
				Ok(text) => text,
				Err(SpeakError::Io(e)) => {
					writeln!(self.output, "Could not read {}: {}\n", path.display(), e)?;
					continue;
				}
				Err(e) => {
					writeln!(self.output, "{}\n", e)?;
					continue;
				}
			};
			let model = NGramModel::build(&text, n)?;
			if model.is_empty() {
				writeln!(self.output, "The text has fewer than {} words. Try another file.\n", n)?;
				continue;
			}
			info!("Loaded {} ({} contexts)", path.display(), model.len());

			if !self.generate_loop(&model)? {
				return Ok(());
			}
			writeln!(self.output)?;
		}
	}

	/// Generates from `model` until the user declines to try again.
	///
	/// Returns `false` if input ended.
	fn generate_loop(&mut self, model: &NGramModel) -> Result<bool> {
		loop {
			let Some(seed) = self.ask_seed(model)? else { return Ok(false) };
			writeln!(self.output)?;

			let Some(length) = self.ask_length(model.n())? else { return Ok(false) };
			writeln!(self.output)?;

			let input = GenerationInput::new(model, seed, length)?;
			let generation = self.generator.generate_from(model, &input, &mut self.rng)?;
			if generation.is_exhausted() {
				writeln!(self.output, "Ran out of selections. Stopping generation early...\n")?;
			}
			writeln!(self.output, "Generated Text:")?;
			writeln!(self.output, "{}", wrap_words(generation.words(), self.width))?;
			writeln!(self.output)?;

			match self.prompt("Would you like to try again? (y/n) ")? {
				Some(answer) if answer.eq_ignore_ascii_case("y") => writeln!(self.output)?,
				Some(_) => return Ok(true),
				None => return Ok(false),
			}
		}
	}

	/// Writes `question` and reads one answer line.
	///
	/// Returns `None` at end of input.
	fn prompt(&mut self, question: &str) -> Result<Option<String>> {
		write!(self.output, "{}", question)?;
		self.output.flush()?;

		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			debug!("End of input");
			return Ok(None);
		}
		Ok(Some(line.trim().to_owned()))
	}

	fn ask_file(&mut self) -> Result<Option<PathBuf>> {
		loop {
			let Some(answer) = self.prompt("Enter a file name, or enter \"q\" to quit: ")? else {
				return Ok(None);
			};
			if answer.eq_ignore_ascii_case("q") {
				return Ok(None);
			}
			if is_file(&answer) {
				return Ok(Some(PathBuf::from(answer)));
			}
			writeln!(self.output, "File not found.")?;
		}
	}

	fn ask_ngram_size(&mut self) -> Result<Option<usize>> {
		loop {
			let Some(answer) = self.prompt("Enter an n-gram size: ")? else { return Ok(None) };
			match parse_ngram_size(&answer) {
				Ok(n) => return Ok(Some(n)),
				Err(SpeakError::InvalidNumericInput(_)) => {
					writeln!(self.output, "Size must be a positive integer.")?
				}
				Err(SpeakError::InvalidNgramSize(_)) => {
					writeln!(self.output, "N-gram size must be greater than 1.")?
				}
				Err(e) => return Err(e),
			}
		}
	}

	fn ask_seed(&mut self, model: &NGramModel) -> Result<Option<Vec<String>>> {
		let count = model.context_len();
		let question = format!(
			"Enter {} starting {}: ",
			count,
			if count > 1 { "words" } else { "word" }
		);

		loop {
			let Some(answer) = self.prompt(&question)? else { return Ok(None) };
			match parse_seed(&answer, model) {
				Ok(seed) => return Ok(Some(seed)),
				Err(SpeakError::WrongSeedLength { .. }) => {
					writeln!(self.output, "Wrong number of starting words.")?
				}
				Err(SpeakError::UnseenContext(_)) => {
					writeln!(self.output, "Your starting words were not found in the text.")?;
					if let Some(example) = model.random_context(&mut self.rng) {
						writeln!(self.output, "For example, try: {}", example.join(" "))?;
					}
				}
				Err(e) => return Err(e),
			}
		}
	}

	fn ask_length(&mut self, n: usize) -> Result<Option<usize>> {
		loop {
			let Some(answer) = self.prompt("Enter the length of text to be generated: ")? else {
				return Ok(None);
			};
			match parse_length(&answer, n) {
				Ok(length) => return Ok(Some(length)),
				Err(SpeakError::InvalidNumericInput(_)) => {
					writeln!(self.output, "Length must be a positive integer.")?
				}
				Err(SpeakError::LengthTooShort { .. }) => {
					writeln!(self.output, "Length must be greater than {}.", n - 1)?
				}
				Err(e) => return Err(e),
			}
		}
	}
}
