use std::io;

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ngram_speak_core::model::{DEFAULT_TOP_K, Generator};

mod render;
mod session;

use render::DEFAULT_WIDTH;
use session::Session;

/// Generate text from the word n-grams of a file.
#[derive(Parser, Debug)]
#[command(name = "ngram-speak", version)]
struct Args {
	/// Number of most common next words each step picks from
	#[arg(long, default_value_t = DEFAULT_TOP_K)]
	top_k: usize,

	/// Column width generated text is wrapped to
	#[arg(long, default_value_t = DEFAULT_WIDTH)]
	width: usize,

	/// Seed the random generator for reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose);

	let generator = Generator::with_top_k(args.top_k)?;
	let rng = match args.seed {
		Some(seed) => {
			info!("Using random seed {}", seed);
			StdRng::seed_from_u64(seed)
		}
		None => StdRng::from_os_rng(),
	};

	let stdin = io::stdin();
	let stdout = io::stdout();
	Session::new(stdin.lock(), stdout.lock(), generator, rng)
		.with_width(args.width)
		.run()?;

	Ok(())
}

/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
		.init();
}
