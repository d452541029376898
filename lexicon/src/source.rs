use std::{
  fs::File,
  io::{BufRead, BufReader},
  path::Path,
};

use util::error::HuntResult;

/// Reads a word list: the first whitespace-delimited token of each line is a
/// word, anything after it on the same line is ignored, and blank lines are
/// skipped.
pub fn read_words<R: BufRead>(reader: R) -> HuntResult<Vec<String>> {
  reader
    .lines()
    .try_fold(Vec::new(), |mut words, line| -> HuntResult<_> {
      if let Some(token) = line?.split_whitespace().next() {
        words.push(token.to_owned());
      }
      Ok(words)
    })
}

pub fn read_words_from_path(path: impl AsRef<Path>) -> HuntResult<Vec<String>> {
  read_words(BufReader::new(File::open(path)?))
}
