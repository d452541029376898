use std::collections::BTreeSet;

use lexicon::{Lexicon, TrieLexicon};
use util::error::HuntResult;

use crate::{
  board::Board,
  search::{SearchStats, Searcher},
};

/// A word hunt: one board, which starts as the default board, and a lexicon
/// that must be loaded before any word can be checked or found.
///
/// No search state is kept here; each query runs its own search.
pub struct WordHunt<L = TrieLexicon> {
  board: Board,
  lexicon: Option<L>,
}

impl<L: Lexicon> WordHunt<L> {
  pub fn new() -> Self {
    Self {
      board: Board::default(),
      lexicon: None,
    }
  }

  pub fn with_lexicon(lexicon: L) -> Self {
    Self {
      board: Board::default(),
      lexicon: Some(lexicon),
    }
  }

  pub fn load_lexicon(&mut self, lexicon: L) {
    self.lexicon = Some(lexicon);
  }

  pub fn lexicon(&self) -> Option<&L> {
    self.lexicon.as_ref()
  }

  /// Replaces the board. On failure the current board is kept.
  pub fn set_board<S: AsRef<str>>(&mut self, tiles: impl IntoIterator<Item = S>) -> HuntResult {
    self.board = Board::from_tiles(tiles)?;
    Ok(())
  }

  pub fn replace_board(&mut self, board: Board) {
    self.board = board;
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn is_valid_word(&self, word: &str) -> HuntResult<bool> {
    self.lexicon.contains(word)
  }

  pub fn is_valid_prefix(&self, prefix: &str) -> HuntResult<bool> {
    self.lexicon.has_prefix(prefix)
  }

  pub fn all_scorable_words(&self, min_length: usize) -> HuntResult<BTreeSet<String>> {
    self.searcher().find_all_words(min_length)
  }

  pub fn scorable_words_with_stats(
    &self,
    min_length: usize,
  ) -> HuntResult<(BTreeSet<String>, SearchStats)> {
    self.searcher().find_all_words_with_stats(min_length)
  }

  pub fn score_for_words<S: AsRef<str>>(
    &self,
    words: impl IntoIterator<Item = S>,
    min_length: usize,
  ) -> HuntResult<usize> {
    self.searcher().score_words(words, min_length)
  }

  /// Row-major path spelling `word`, empty when the word is not on the board.
  pub fn is_on_board(&self, word: &str) -> HuntResult<Vec<usize>> {
    self.searcher().locate(word)
  }

  fn searcher(&self) -> Searcher<'_, Option<L>> {
    Searcher::new(&self.board, &self.lexicon)
  }
}

impl<L: Lexicon> Default for WordHunt<L> {
  fn default() -> Self {
    Self::new()
  }
}
