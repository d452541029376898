use std::{collections::BTreeSet, io::BufRead, path::Path};

use util::{error::HuntResult, text::canonicalize};

use crate::{
  query_key,
  source::{read_words, read_words_from_path},
  Lexicon,
};

/// Lexicon over an ordered set. A prefix exists iff the smallest stored word
/// that is >= the prefix starts with it, since lexical order keeps every word
/// sharing a prefix contiguous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortedLexicon {
  words: BTreeSet<String>,
}

impl SortedLexicon {
  pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
    Self {
      words: words
        .into_iter()
        .filter(|word| !word.as_ref().is_empty())
        .map(|word| canonicalize(word.as_ref()))
        .collect(),
    }
  }

  pub fn from_reader<R: BufRead>(reader: R) -> HuntResult<Self> {
    let lexicon = Self::from_words(read_words(reader)?);
    log::info!("Loaded {} words into sorted lexicon", lexicon.len());
    Ok(lexicon)
  }

  pub fn from_path(path: impl AsRef<Path>) -> HuntResult<Self> {
    let lexicon = Self::from_words(read_words_from_path(path.as_ref())?);
    log::info!(
      "Loaded {} words into sorted lexicon from {}",
      lexicon.len(),
      path.as_ref().display()
    );
    Ok(lexicon)
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Smallest stored word >= `key`.
  fn ceiling(&self, key: &str) -> Option<&str> {
    self
      .words
      .range::<str, _>((std::ops::Bound::Included(key), std::ops::Bound::Unbounded))
      .next()
      .map(String::as_str)
  }
}

impl Lexicon for SortedLexicon {
  fn contains(&self, word: &str) -> HuntResult<bool> {
    let key = query_key(word, "word")?;
    Ok(self.words.contains(&key))
  }

  fn has_prefix(&self, prefix: &str) -> HuntResult<bool> {
    let key = query_key(prefix, "prefix")?;
    Ok(self.ceiling(&key).is_some_and(|word| word.starts_with(&key)))
  }
}
