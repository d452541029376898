use lexicon::Lexicon;
use util::{
  error::HuntResult,
  text::{canonicalize, char_len},
};

use crate::search::Searcher;

/// Points for one scorable word: one for reaching the minimum length, plus
/// one per character beyond it.
pub const fn word_score(length: usize, min_length: usize) -> usize {
  if length < min_length {
    0
  } else {
    length - min_length + 1
  }
}

impl<L> Searcher<'_, L>
where
  L: Lexicon + ?Sized,
{
  /// Total score of `words`. A word scores only if it is long enough, in the
  /// lexicon, and placeable on the board; anything else counts zero. Each
  /// word given is scored on its own.
  pub fn score_words<S: AsRef<str>>(
    &self,
    words: impl IntoIterator<Item = S>,
    min_length: usize,
  ) -> HuntResult<usize> {
    self.check_min_length(min_length)?;

    words.into_iter().try_fold(0, |score, word| -> HuntResult<_> {
      let word = canonicalize(word.as_ref());
      let length = char_len(&word);
      let scorable = length >= min_length
        && self.lexicon().contains(&word)?
        && !self.locate(&word)?.is_empty();
      Ok(if scorable {
        score + word_score(length, min_length)
      } else {
        score
      })
    })
  }
}
