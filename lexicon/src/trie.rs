use std::{io::BufRead, path::Path};

use bitcode::{Decode, Encode};
use util::{
  error::{HuntError, HuntResult},
  text::canonicalize,
};

use crate::{
  query_key,
  source::{read_words, read_words_from_path},
  Lexicon,
};

const ROOT: usize = 0;

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
struct TrieNode {
  /// Edges sorted by label, pointing into the node arena.
  children: Vec<(char, u32)>,
  terminal: bool,
}

impl TrieNode {
  fn child(&self, c: char) -> Option<usize> {
    self
      .children
      .binary_search_by_key(&c, |&(label, _)| label)
      .ok()
      .map(|idx| self.children[idx].1 as usize)
  }
}

/// Prefix tree over canonicalized words. Both queries walk at most one node
/// per character of the argument.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct TrieLexicon {
  nodes: Vec<TrieNode>,
  word_count: u32,
}

impl TrieLexicon {
  pub fn new() -> Self {
    Self {
      nodes: vec![TrieNode::default()],
      word_count: 0,
    }
  }

  pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
    let mut lexicon = Self::new();
    for word in words {
      lexicon.insert(word.as_ref());
    }
    lexicon
  }

  pub fn from_reader<R: BufRead>(reader: R) -> HuntResult<Self> {
    let lexicon = Self::from_words(read_words(reader)?);
    log::info!("Loaded {} words into trie lexicon", lexicon.len());
    Ok(lexicon)
  }

  pub fn from_path(path: impl AsRef<Path>) -> HuntResult<Self> {
    let lexicon = Self::from_words(read_words_from_path(path.as_ref())?);
    log::info!(
      "Loaded {} words into trie lexicon from {}",
      lexicon.len(),
      path.as_ref().display()
    );
    Ok(lexicon)
  }

  /// Decodes a lexicon previously written with [`TrieLexicon::to_bytes`].
  pub fn from_bytes(bytes: &[u8]) -> HuntResult<Self> {
    let lexicon: Self = bitcode::decode(bytes)
      .map_err(|err| HuntError::Parse(format!("Failed to decode compiled lexicon: {err}")))?;
    if lexicon.nodes.is_empty() {
      return Err(HuntError::Parse(
        "Compiled lexicon has no root node".to_owned(),
      ));
    }
    Ok(lexicon)
  }

  pub fn to_bytes(&self) -> Vec<u8> {
    bitcode::encode(self)
  }

  /// Adds a word. Empty words are ignored.
  pub fn insert(&mut self, word: &str) {
    if word.is_empty() {
      return;
    }

    let mut node = ROOT;
    for c in canonicalize(word).chars() {
      node = match self.nodes[node].child(c) {
        Some(child) => child,
        None => {
          let child = self.nodes.len();
          self.nodes.push(TrieNode::default());
          let children = &mut self.nodes[node].children;
          let insert_at = children.partition_point(|&(label, _)| label < c);
          children.insert(insert_at, (c, child as u32));
          child
        }
      };
    }

    if !self.nodes[node].terminal {
      self.nodes[node].terminal = true;
      self.word_count += 1;
    }
  }

  pub fn len(&self) -> usize {
    self.word_count as usize
  }

  pub fn is_empty(&self) -> bool {
    self.word_count == 0
  }

  fn find(&self, key: &str) -> Option<&TrieNode> {
    key
      .chars()
      .try_fold(ROOT, |node, c| self.nodes.get(node)?.child(c))
      .and_then(|node| self.nodes.get(node))
  }
}

impl Default for TrieLexicon {
  fn default() -> Self {
    Self::new()
  }
}

impl Lexicon for TrieLexicon {
  fn contains(&self, word: &str) -> HuntResult<bool> {
    let key = query_key(word, "word")?;
    Ok(self.find(&key).is_some_and(|node| node.terminal))
  }

  fn has_prefix(&self, prefix: &str) -> HuntResult<bool> {
    let key = query_key(prefix, "prefix")?;
    Ok(self.find(&key).is_some())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::io::Cursor;

  use googletest::prelude::*;
  use util::error::HuntError;

  use crate::Lexicon;

  use super::TrieLexicon;

  #[gtest]
  fn test_contains_is_case_insensitive() {
    let lexicon = TrieLexicon::from_words(["Cat", "cart", "DOG"]);
    expect_true!(lexicon.contains("cat").unwrap());
    expect_true!(lexicon.contains("CAT").unwrap());
    expect_true!(lexicon.contains("Cart").unwrap());
    expect_true!(lexicon.contains("dog").unwrap());
    expect_false!(lexicon.contains("ca").unwrap());
    expect_false!(lexicon.contains("cats").unwrap());
  }

  #[gtest]
  fn test_has_prefix() {
    let lexicon = TrieLexicon::from_words(["cat", "cart"]);
    expect_true!(lexicon.has_prefix("c").unwrap());
    expect_true!(lexicon.has_prefix("CA").unwrap());
    expect_true!(lexicon.has_prefix("car").unwrap());
    expect_true!(lexicon.has_prefix("cat").unwrap());
    expect_false!(lexicon.has_prefix("cab").unwrap());
    expect_false!(lexicon.has_prefix("carts").unwrap());
    expect_false!(lexicon.has_prefix("d").unwrap());
  }

  #[gtest]
  fn test_duplicates_collapse() {
    let lexicon = TrieLexicon::from_words(["ab", "AB", "ab", "abc"]);
    expect_that!(lexicon.len(), eq(2));
  }

  #[gtest]
  fn test_empty_words_ignored() {
    let lexicon = TrieLexicon::from_words(["", "a"]);
    expect_that!(lexicon.len(), eq(1));
    expect_true!(TrieLexicon::new().is_empty());
  }

  #[gtest]
  fn test_multichar_keys() {
    let lexicon = TrieLexicon::from_words(["quit", "queen"]);
    expect_true!(lexicon.has_prefix("QU").unwrap());
    expect_true!(lexicon.has_prefix("QUE").unwrap());
    expect_false!(lexicon.has_prefix("QUA").unwrap());
  }

  #[gtest]
  fn test_from_reader() {
    let lexicon = TrieLexicon::from_reader(Cursor::new("ant 3\nbee\n\nwasp x y\n")).unwrap();
    expect_that!(lexicon.len(), eq(3));
    expect_true!(lexicon.contains("WASP").unwrap());
    expect_false!(lexicon.contains("X").unwrap());
  }

  #[gtest]
  fn test_compiled_form_reloads() {
    let lexicon = TrieLexicon::from_words(["zebra", "zero", "apple"]);
    let reloaded = TrieLexicon::from_bytes(&lexicon.to_bytes()).unwrap();
    expect_that!(reloaded, eq(&lexicon));
    expect_true!(reloaded.contains("zero").unwrap());
  }

  #[gtest]
  fn test_corrupt_compiled_form() {
    let result = TrieLexicon::from_bytes(&[]);
    expect_true!(matches!(result, Err(HuntError::Parse(_))));
  }
}
