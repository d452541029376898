use std::collections::BTreeSet;

use lexicon::Lexicon;
use util::{
  error::{HuntError, HuntResult},
  pos::Pos,
  text::{canonicalize, char_len},
};

use crate::board::Board;

#[derive(Clone, Copy, Debug)]
struct Step {
  pos: Pos,
  index: usize,
  /// Length in bytes of the candidate before this step's tile was appended.
  candidate_len: usize,
}

/// Scratch state for one top-level search: the tiles currently committed to
/// the path, which board cells they occupy, and the text they spell.
struct SearchPath {
  steps: Vec<Step>,
  visited: Vec<bool>,
  candidate: String,
}

impl SearchPath {
  fn new(board: &Board) -> Self {
    Self {
      steps: Vec::with_capacity(board.len()),
      visited: vec![false; board.len()],
      candidate: String::new(),
    }
  }

  fn push(&mut self, pos: Pos, index: usize, tile: &str) {
    self.steps.push(Step {
      pos,
      index,
      candidate_len: self.candidate.len(),
    });
    self.visited[index] = true;
    self.candidate.push_str(tile);
  }

  fn pop(&mut self) {
    if let Some(step) = self.steps.pop() {
      self.visited[step.index] = false;
      self.candidate.truncate(step.candidate_len);
    }
  }

  fn is_visited(&self, index: usize) -> bool {
    self.visited.get(index).copied().unwrap_or(true)
  }

  fn last(&self) -> Option<Pos> {
    self.steps.last().map(|step| step.pos)
  }

  fn depth(&self) -> usize {
    self.steps.len()
  }

  fn word(&self) -> &str {
    &self.candidate
  }

  fn indices(&self) -> Vec<usize> {
    self.steps.iter().map(|step| step.index).collect()
  }
}

/// Counters gathered during one enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
  /// Starting tiles whose text was a lexicon prefix.
  pub starts_explored: usize,
  pub prefix_queries: usize,
  /// Branches cut because no lexicon word extends the candidate.
  pub pruned: usize,
  /// Longest path, in tiles, that the search committed to.
  pub max_depth: usize,
}

struct Enumeration {
  min_length: usize,
  words: BTreeSet<String>,
  stats: SearchStats,
}

/// Word search over one board and one lexicon. Every top-level call owns its
/// own path state, so a `Searcher` can be shared freely between callers.
pub struct Searcher<'a, L: ?Sized> {
  board: &'a Board,
  lexicon: &'a L,
}

impl<'a, L> Searcher<'a, L>
where
  L: Lexicon + ?Sized,
{
  pub fn new(board: &'a Board, lexicon: &'a L) -> Self {
    Self { board, lexicon }
  }

  pub fn lexicon(&self) -> &L {
    self.lexicon
  }

  pub(crate) fn check_min_length(&self, min_length: usize) -> HuntResult {
    if min_length < 1 {
      return Err(HuntError::InvalidArgument(format!(
        "minimum word length must be at least 1, got {min_length}"
      )));
    }
    self.lexicon.ensure_loaded()
  }

  /// Every lexicon word of at least `min_length` characters that can be
  /// spelled by a path of adjacent, pairwise-distinct tiles. Sorted ascending.
  pub fn find_all_words(&self, min_length: usize) -> HuntResult<BTreeSet<String>> {
    self
      .find_all_words_with_stats(min_length)
      .map(|(words, _)| words)
  }

  pub fn find_all_words_with_stats(
    &self,
    min_length: usize,
  ) -> HuntResult<(BTreeSet<String>, SearchStats)> {
    self.check_min_length(min_length)?;

    let mut found = Enumeration {
      min_length,
      words: BTreeSet::new(),
      stats: SearchStats::default(),
    };
    let mut path = SearchPath::new(self.board);

    for start in self.board.positions() {
      let (Some(tile), Some(index)) = (self.board.tile(start), self.board.index_of(start)) else {
        continue;
      };

      path.push(start, index, tile);
      self.record(&path, &mut found)?;
      found.stats.prefix_queries += 1;
      if self.lexicon.has_prefix(path.word())? {
        found.stats.starts_explored += 1;
        self.extend(&mut path, &mut found)?;
      } else {
        found.stats.pruned += 1;
      }
      path.pop();
    }

    log::debug!(
      "Found {} words on {side}x{side} board: {:?}",
      found.words.len(),
      found.stats,
      side = self.board.side()
    );
    Ok((found.words, found.stats))
  }

  fn record(&self, path: &SearchPath, found: &mut Enumeration) -> HuntResult {
    found.stats.max_depth = found.stats.max_depth.max(path.depth());
    let word = path.word();
    if char_len(word) >= found.min_length && self.lexicon.contains(word)? {
      found.words.insert(word.to_owned());
    }
    Ok(())
  }

  fn extend(&self, path: &mut SearchPath, found: &mut Enumeration) -> HuntResult {
    let Some(last) = path.last() else {
      return Ok(());
    };

    for neighbor in self.board.neighbors(last) {
      let (Some(tile), Some(index)) = (self.board.tile(neighbor), self.board.index_of(neighbor))
      else {
        continue;
      };
      if path.is_visited(index) {
        continue;
      }

      path.push(neighbor, index, tile);
      found.stats.prefix_queries += 1;
      if self.lexicon.has_prefix(path.word())? {
        self.record(path, found)?;
        self.extend(path, found)?;
      } else {
        found.stats.pruned += 1;
      }
      path.pop();
    }

    Ok(())
  }

  /// Row-major indices of the tiles spelling `word`, or an empty path if the
  /// word cannot be placed. Starts are tried in row-major order and the first
  /// placement found wins.
  pub fn locate(&self, word: &str) -> HuntResult<Vec<usize>> {
    if word.is_empty() {
      return Err(HuntError::InvalidArgument("word to locate is empty".to_owned()));
    }
    self.lexicon.ensure_loaded()?;

    let target = canonicalize(word);
    let mut path = SearchPath::new(self.board);

    for start in self.board.positions() {
      let (Some(tile), Some(index)) = (self.board.tile(start), self.board.index_of(start)) else {
        continue;
      };
      if !target.starts_with(tile) {
        continue;
      }

      path.push(start, index, tile);
      if self.place(&mut path, &target) {
        return Ok(path.indices());
      }
      path.pop();
    }

    Ok(Vec::new())
  }

  /// Extends `path` until it spells `target`. On success the path is left
  /// holding the placement.
  fn place(&self, path: &mut SearchPath, target: &str) -> bool {
    if path.word() == target {
      return true;
    }
    let Some(last) = path.last() else {
      return false;
    };

    for neighbor in self.board.neighbors(last) {
      let (Some(tile), Some(index)) = (self.board.tile(neighbor), self.board.index_of(neighbor))
      else {
        continue;
      };
      if path.is_visited(index) {
        continue;
      }
      let remaining = target.get(path.word().len()..).unwrap_or_default();
      if !remaining.starts_with(tile) {
        continue;
      }

      path.push(neighbor, index, tile);
      if self.place(path, target) {
        return true;
      }
      path.pop();
    }

    false
  }
}
