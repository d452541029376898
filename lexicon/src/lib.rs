#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Word validity oracles for board search.
//!
//! A [`Lexicon`] answers two questions: is a string a word, and does any word
//! start with a string. Words are canonicalized on the way in, and every query
//! is canonicalized before lookup, so both questions are case-insensitive.

pub mod sorted;
pub mod source;
pub mod trie;

pub use sorted::SortedLexicon;
pub use trie::TrieLexicon;

use util::{
  error::{HuntError, HuntResult},
  text::canonicalize,
};

pub trait Lexicon {
  /// Exact membership.
  fn contains(&self, word: &str) -> HuntResult<bool>;

  /// True iff some word in the lexicon begins with `prefix`.
  fn has_prefix(&self, prefix: &str) -> HuntResult<bool>;

  fn is_loaded(&self) -> bool {
    true
  }

  fn ensure_loaded(&self) -> HuntResult {
    if self.is_loaded() {
      Ok(())
    } else {
      Err(HuntError::LexiconNotLoaded)
    }
  }
}

/// A lexicon slot that may not have been filled yet. Every query against an
/// empty slot fails with `LexiconNotLoaded`.
impl<L: Lexicon> Lexicon for Option<L> {
  fn contains(&self, word: &str) -> HuntResult<bool> {
    self
      .as_ref()
      .ok_or(HuntError::LexiconNotLoaded)?
      .contains(word)
  }

  fn has_prefix(&self, prefix: &str) -> HuntResult<bool> {
    self
      .as_ref()
      .ok_or(HuntError::LexiconNotLoaded)?
      .has_prefix(prefix)
  }

  fn is_loaded(&self) -> bool {
    self.as_ref().is_some_and(|lexicon| lexicon.is_loaded())
  }
}

impl<L: Lexicon + ?Sized> Lexicon for Box<L> {
  fn contains(&self, word: &str) -> HuntResult<bool> {
    (**self).contains(word)
  }

  fn has_prefix(&self, prefix: &str) -> HuntResult<bool> {
    (**self).has_prefix(prefix)
  }

  fn is_loaded(&self) -> bool {
    (**self).is_loaded()
  }
}

/// Canonical lookup key for a query argument. An empty argument counts as
/// absent.
pub(crate) fn query_key(arg: &str, what: &str) -> HuntResult<String> {
  if arg.is_empty() {
    return Err(HuntError::NullInput(format!("{what} is empty")));
  }
  Ok(canonicalize(arg))
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::error::HuntError;

  use crate::{Lexicon, SortedLexicon, TrieLexicon};

  #[gtest]
  fn test_unloaded_slot_fails_both_queries() {
    let slot: Option<TrieLexicon> = None;
    expect_false!(slot.is_loaded());
    expect_true!(matches!(slot.contains("AB"), Err(HuntError::LexiconNotLoaded)));
    expect_true!(matches!(slot.has_prefix("A"), Err(HuntError::LexiconNotLoaded)));
    expect_true!(matches!(slot.ensure_loaded(), Err(HuntError::LexiconNotLoaded)));
  }

  #[gtest]
  fn test_unloaded_slot_checked_before_argument() {
    let slot: Option<TrieLexicon> = None;
    expect_true!(matches!(slot.contains(""), Err(HuntError::LexiconNotLoaded)));
  }

  #[gtest]
  fn test_loaded_slot_delegates() {
    let slot = Some(TrieLexicon::from_words(["ab", "ad"]));
    expect_true!(slot.is_loaded());
    expect_true!(slot.contains("ab").unwrap());
    expect_true!(slot.has_prefix("a").unwrap());
    expect_false!(slot.has_prefix("b").unwrap());
  }

  #[gtest]
  fn test_boxed_lexicon() {
    let boxed: Box<dyn Lexicon> = Box::new(SortedLexicon::from_words(["ab"]));
    expect_true!(boxed.is_loaded());
    expect_true!(boxed.contains("AB").unwrap());
    expect_true!(boxed.has_prefix("A").unwrap());
  }

  #[gtest]
  fn test_empty_argument_is_null_input() {
    let lexicon = TrieLexicon::from_words(["ab"]);
    expect_true!(matches!(lexicon.contains(""), Err(HuntError::NullInput(_))));
    expect_true!(matches!(lexicon.has_prefix(""), Err(HuntError::NullInput(_))));
  }
}
