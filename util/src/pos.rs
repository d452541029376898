use std::{
  fmt::Display,
  ops::{Add, Sub},
};

/// A board coordinate. Rows grow downward, columns grow rightward.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pos {
  pub row: i32,
  pub col: i32,
}

impl Pos {
  pub const fn zero() -> Self {
    Self { row: 0, col: 0 }
  }

  pub const fn new(row: i32, col: i32) -> Self {
    Self { row, col }
  }

  /// The eight surrounding positions, unbounded. Ordered by row delta, then
  /// column delta, each running -1, 0, 1.
  pub fn surrounding(self) -> impl Iterator<Item = Pos> {
    Diff::NEIGHBORHOOD.into_iter().map(move |diff| self + diff)
  }

  pub fn is_adjacent(self, other: Pos) -> bool {
    (self - other).is_unit_step()
  }
}

impl Sub for Pos {
  type Output = Diff;

  fn sub(self, rhs: Self) -> Diff {
    Diff {
      row: self.row - rhs.row,
      col: self.col - rhs.col,
    }
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self {
      row: self.row + rhs.row,
      col: self.col + rhs.col,
    }
  }
}

impl Display for Pos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.row, self.col)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub row: i32,
  pub col: i32,
}

impl Diff {
  pub const NEIGHBORHOOD: [Diff; 8] = [
    Diff { row: -1, col: -1 },
    Diff { row: -1, col: 0 },
    Diff { row: -1, col: 1 },
    Diff { row: 0, col: -1 },
    Diff { row: 0, col: 1 },
    Diff { row: 1, col: -1 },
    Diff { row: 1, col: 0 },
    Diff { row: 1, col: 1 },
  ];

  /// True iff both deltas are in {-1, 0, 1} and not both zero.
  pub const fn is_unit_step(&self) -> bool {
    self.row.abs() <= 1 && self.col.abs() <= 1 && !(self.row == 0 && self.col == 0)
  }
}

impl Display for Diff {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.row, self.col)
  }
}

#[cfg(test)]
mod tests {
  use googletest::prelude::*;

  use super::{Diff, Pos};

  #[gtest]
  fn test_surrounding_order() {
    let pos = Pos::new(1, 1);
    expect_that!(
      pos.surrounding().collect::<Vec<_>>(),
      container_eq([
        Pos::new(0, 0),
        Pos::new(0, 1),
        Pos::new(0, 2),
        Pos::new(1, 0),
        Pos::new(1, 2),
        Pos::new(2, 0),
        Pos::new(2, 1),
        Pos::new(2, 2),
      ])
    );
  }

  #[gtest]
  fn test_adjacency() {
    let origin = Pos::zero();
    expect_true!(origin.is_adjacent(Pos::new(1, 1)));
    expect_true!(origin.is_adjacent(Pos::new(0, 1)));
    expect_false!(origin.is_adjacent(origin));
    expect_false!(origin.is_adjacent(Pos::new(0, 2)));
    expect_false!(origin.is_adjacent(Pos::new(-2, -1)));
  }

  #[gtest]
  fn test_neighborhood_is_all_unit_steps() {
    expect_that!(
      Diff::NEIGHBORHOOD.iter().filter(|diff| diff.is_unit_step()).count(),
      eq(8)
    );
  }
}
