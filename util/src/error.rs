use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
  io,
};

#[derive(Debug)]
pub enum HuntError {
  /// A required argument was absent (empty word, prefix, tile or tile list).
  NullInput(String),
  /// The tile count is not a perfect square.
  InvalidShape { tiles: usize },
  InvalidArgument(String),
  /// A lexicon query was made before any lexicon was loaded.
  LexiconNotLoaded,
  Parse(String),
  Io(io::Error),
}

impl Display for HuntError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      HuntError::NullInput(what) => write!(f, "Null input: {what}"),
      HuntError::InvalidShape { tiles } => {
        write!(f, "Invalid shape: {tiles} tiles do not form a square board")
      }
      HuntError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
      HuntError::LexiconNotLoaded => write!(f, "Lexicon has not been loaded"),
      HuntError::Parse(msg) => write!(f, "Parse error: {msg}"),
      HuntError::Io(err) => write!(f, "I/O error: {err}"),
    }
  }
}

impl Error for HuntError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      HuntError::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl From<io::Error> for HuntError {
  fn from(err: io::Error) -> Self {
    HuntError::Io(err)
  }
}

pub type HuntResult<T = ()> = Result<T, HuntError>;

/// Result type for binaries, where errors from several crates meet.
pub type CliResult<T = ()> = Result<T, Box<dyn Error>>;
