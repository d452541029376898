use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
  Text,
  Json,
}

/// How a text word list is indexed once loaded.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LexiconIndex {
  Trie,
  Sorted,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Find every word on the board.
  Solve {
    #[arg(long, default_value_t = 3)]
    min_length: usize,
  },
  /// Print the tile path spelling a word.
  Locate { word: String },
  /// Score a set of words against the board.
  Score {
    #[arg(long, default_value_t = 3)]
    min_length: usize,

    #[arg(required = true)]
    words: Vec<String>,
  },
  /// Write the lexicon in compiled form for faster loading.
  Compile {
    #[arg(long)]
    out: PathBuf,
  },
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Word list, one word per line, or a compiled `.bin` lexicon.
  #[arg(long)]
  pub lexicon: PathBuf,

  #[arg(long, default_value = "trie")]
  pub index: LexiconIndex,

  /// Row-major tiles separated by whitespace. Rows may be split over lines.
  #[arg(long, conflicts_with = "random")]
  pub board: Option<String>,

  /// Roll a random board with this many tiles per side.
  #[arg(long)]
  pub random: Option<usize>,

  #[arg(long, requires = "random")]
  pub seed: Option<u64>,

  #[arg(long, default_value = "text")]
  pub format: OutputFormat,

  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,

  #[command(subcommand)]
  pub command: Command,
}
