//! Canonical text form shared by boards and lexicons.
//!
//! Tiles and words are canonicalized exactly once, when they enter a board or
//! a lexicon, so every later comparison is a plain string comparison.

pub fn canonicalize(text: &str) -> String {
  text.to_uppercase()
}

/// Length of a word in characters, which is what minimum lengths and scores
/// are measured in.
pub fn char_len(text: &str) -> usize {
  text.chars().count()
}

#[cfg(test)]
mod tests {
  use googletest::prelude::*;

  use super::{canonicalize, char_len};

  #[gtest]
  fn test_canonicalize_uppercases() {
    expect_that!(canonicalize("qu"), eq("QU"));
    expect_that!(canonicalize("Hello"), eq("HELLO"));
    expect_that!(canonicalize(""), eq(""));
  }

  #[gtest]
  fn test_char_len_counts_chars() {
    expect_that!(char_len("QU"), eq(2));
    expect_that!(char_len("ÉTÉ"), eq(3));
  }
}
