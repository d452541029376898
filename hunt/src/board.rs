use std::fmt::Display;

use itertools::Itertools;
use util::{
  error::{HuntError, HuntResult},
  grid::{Grid, Gridlike},
  pos::Pos,
  text::canonicalize,
};

const DEFAULT_ROWS: [[&str; 4]; 4] = [
  ["E", "E", "C", "A"],
  ["A", "L", "E", "P"],
  ["H", "N", "B", "O"],
  ["QU", "T", "T", "Y"],
];

/// A square grid of canonicalized tiles. Tiles may span several characters
/// ("QU"). Boards are never mutated; a new board replaces an old one.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
  grid: Grid<String>,
}

impl Board {
  /// Builds a board from tiles in row-major order. The tile count must be a
  /// perfect square.
  pub fn from_tiles<S: AsRef<str>>(tiles: impl IntoIterator<Item = S>) -> HuntResult<Self> {
    let tiles = tiles
      .into_iter()
      .map(|tile| {
        let tile = tile.as_ref();
        if tile.is_empty() {
          Err(HuntError::NullInput("board tile is empty".to_owned()))
        } else {
          Ok(canonicalize(tile))
        }
      })
      .collect::<HuntResult<Vec<_>>>()?;
    if tiles.is_empty() {
      return Err(HuntError::NullInput("board has no tiles".to_owned()));
    }

    let side = square_side(tiles.len()).ok_or(HuntError::InvalidShape { tiles: tiles.len() })?;
    Ok(Self {
      grid: Grid::from_vec(tiles, side as u32, side as u32)?,
    })
  }

  /// Parses whitespace-separated tiles. When the layout spans several lines,
  /// every line must hold one full row.
  pub fn parse(layout: &str) -> HuntResult<Self> {
    let rows: Vec<Vec<&str>> = layout
      .lines()
      .map(|line| line.split_whitespace().collect::<Vec<_>>())
      .filter(|row| !row.is_empty())
      .collect();

    if rows.len() > 1
      && (!rows.iter().map(Vec::len).all_equal() || rows.first().map(Vec::len) != Some(rows.len()))
    {
      return Err(HuntError::InvalidShape {
        tiles: rows.iter().map(Vec::len).sum(),
      });
    }

    Self::from_tiles(rows.into_iter().flatten())
  }

  pub fn side(&self) -> usize {
    self.grid.width() as usize
  }

  pub fn len(&self) -> usize {
    self.grid.len()
  }

  pub fn is_empty(&self) -> bool {
    self.grid.is_empty()
  }

  pub fn tile(&self, pos: Pos) -> Option<&str> {
    self.grid.get(pos).map(String::as_str)
  }

  /// Tiles in row-major order.
  pub fn tiles(&self) -> impl Iterator<Item = &str> {
    self.grid.iter().map(String::as_str)
  }

  /// Positions in row-major order.
  pub fn positions(&self) -> impl Iterator<Item = Pos> {
    self.grid.positions()
  }

  /// Adjacent positions of `pos` (at most eight), computed on every call.
  pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    self.grid.neighbors(pos)
  }

  pub fn index_of(&self, pos: Pos) -> Option<usize> {
    self.grid.index_of(pos)
  }

  pub fn pos_of(&self, index: usize) -> Option<Pos> {
    self.grid.pos_of(index)
  }
}

impl Default for Board {
  fn default() -> Self {
    Self {
      grid: Grid::from_rows(DEFAULT_ROWS.map(|row| row.map(str::to_owned))),
    }
  }
}

impl Display for Board {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.grid)
  }
}

impl std::fmt::Debug for Board {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self.grid)
  }
}

fn square_side(count: usize) -> Option<usize> {
  let side = (count as f64).sqrt().round() as usize;
  (side * side == count).then_some(side)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::{error::HuntError, pos::Pos};

  use super::{square_side, Board};

  #[gtest]
  fn test_square_side() {
    expect_that!(square_side(1), some(eq(1)));
    expect_that!(square_side(16), some(eq(4)));
    expect_that!(square_side(15), none());
    expect_that!(square_side(17), none());
    expect_that!(square_side(1 << 20), some(eq(1 << 10)));
  }

  #[gtest]
  fn test_from_tiles_canonicalizes() {
    let board = Board::from_tiles(["a", "b", "qu", "D"]).unwrap();
    expect_that!(board.side(), eq(2));
    expect_that!(board.tiles().collect::<Vec<_>>(), container_eq(["A", "B", "QU", "D"]));
    expect_that!(board.tile(Pos::new(1, 0)), some(eq("QU")));
    expect_that!(board.tile(Pos::new(2, 0)), none());
  }

  #[gtest]
  fn test_not_square() {
    let result = Board::from_tiles(["A", "B", "C"]);
    expect_true!(matches!(result, Err(HuntError::InvalidShape { tiles: 3 })));
  }

  #[gtest]
  fn test_absent_input() {
    expect_true!(matches!(
      Board::from_tiles(Vec::<String>::new()),
      Err(HuntError::NullInput(_))
    ));
    expect_true!(matches!(
      Board::from_tiles(["A", "", "C", "D"]),
      Err(HuntError::NullInput(_))
    ));
  }

  #[gtest]
  fn test_parse_rows() {
    let board = Board::parse(
      "a b c
       d e f
       g h i",
    )
    .unwrap();
    expect_that!(board.side(), eq(3));
    expect_that!(board.tile(Pos::new(2, 1)), some(eq("H")));
  }

  #[gtest]
  fn test_parse_single_line() {
    let board = Board::parse("a b c d").unwrap();
    expect_that!(board.side(), eq(2));
  }

  #[gtest]
  fn test_parse_ragged_rows() {
    let result = Board::parse(
      "a b
       c d e
       f",
    );
    expect_true!(matches!(result, Err(HuntError::InvalidShape { .. })));
  }

  #[gtest]
  fn test_parse_rows_not_square() {
    let result = Board::parse(
      "a b c
       d e f",
    );
    expect_true!(matches!(result, Err(HuntError::InvalidShape { tiles: 6 })));
  }

  #[gtest]
  fn test_neighbors_of_corner() {
    let board = Board::parse("a b c d e f g h i").unwrap();
    expect_that!(
      board
        .neighbors(Pos::zero())
        .map(|pos| board.index_of(pos).unwrap())
        .collect::<Vec<_>>(),
      container_eq([1, 3, 4])
    );
    expect_that!(board.neighbors(Pos::new(1, 1)).count(), eq(8));
  }

  #[gtest]
  fn test_one_by_one_has_no_neighbors() {
    let board = Board::from_tiles(["A"]).unwrap();
    expect_that!(board.neighbors(Pos::zero()).count(), eq(0));
  }

  #[gtest]
  fn test_row_major_contract() {
    let board = Board::parse("a b c d e f g h i").unwrap();
    for (index, pos) in board.positions().enumerate() {
      expect_that!(board.index_of(pos), some(eq(index)));
      expect_that!(board.pos_of(index), some(eq(pos)));
      expect_that!(
        index,
        eq(pos.row as usize * board.side() + pos.col as usize)
      );
    }
  }

  #[gtest]
  fn test_display() {
    let board = Board::from_tiles(["A", "B", "QU", "D"]).unwrap();
    expect_that!(board.to_string(), eq("A B \nQU D "));
  }

  #[gtest]
  fn test_default_board() {
    let board = Board::default();
    expect_that!(board.side(), eq(4));
    expect_that!(board.tile(Pos::new(3, 0)), some(eq("QU")));
    expect_that!(
      &board,
      eq(&Board::parse("E E C A\nA L E P\nH N B O\nqu t t y").unwrap())
    );
  }
}
