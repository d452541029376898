use std::{fmt::Display, time::Duration};

use hunt::{Board, SearchStats};
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BoardView {
  rows: Vec<Vec<String>>,
}

impl BoardView {
  pub fn new(board: &Board) -> Self {
    let tiles: Vec<String> = board.tiles().map(str::to_owned).collect();
    Self {
      rows: tiles.chunks(board.side()).map(<[String]>::to_vec).collect(),
    }
  }
}

impl Display for BoardView {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      self
        .rows
        .iter()
        .map(|row| row.iter().map(|tile| format!("{tile} ")).join(""))
        .join("\n")
    )
  }
}

#[derive(Debug, Serialize)]
pub struct StatsView {
  starts_explored: usize,
  prefix_queries: usize,
  pruned: usize,
  max_depth: usize,
  elapsed_secs: f32,
}

impl StatsView {
  pub fn new(stats: SearchStats, elapsed: Duration) -> Self {
    Self {
      starts_explored: stats.starts_explored,
      prefix_queries: stats.prefix_queries,
      pruned: stats.pruned,
      max_depth: stats.max_depth,
      elapsed_secs: elapsed.as_secs_f32(),
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Report {
  Solve {
    board: BoardView,
    min_length: usize,
    words: Vec<String>,
    score: usize,
    stats: StatsView,
  },
  Locate {
    board: BoardView,
    word: String,
    path: Vec<usize>,
  },
  Score {
    board: BoardView,
    min_length: usize,
    words: Vec<String>,
    score: usize,
  },
  Compile {
    out: String,
    words: usize,
    bytes: usize,
  },
}

impl Display for Report {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Report::Solve {
        board,
        min_length,
        words,
        score,
        stats: _,
      } => {
        writeln!(f, "{board}")?;
        writeln!(f)?;
        words.iter().try_for_each(|word| writeln!(f, "{word}"))?;
        write!(
          f,
          "{} words of length {min_length} or more, score {score}",
          words.len()
        )
      }
      Report::Locate { board, word, path } => {
        writeln!(f, "{board}")?;
        writeln!(f)?;
        if path.is_empty() {
          write!(f, "{word} is not on the board")
        } else {
          write!(f, "{word}: {}", path.iter().join(" "))
        }
      }
      Report::Score {
        board,
        min_length,
        words,
        score,
      } => {
        writeln!(f, "{board}")?;
        writeln!(f)?;
        write!(
          f,
          "{} words scored with minimum length {min_length}: {score}",
          words.len()
        )
      }
      Report::Compile { out, words, bytes } => {
        write!(f, "Wrote {words} words ({bytes} bytes) to {out}")
      }
    }
  }
}
