use std::fmt::{Debug, Display};

use crate::{
  error::{HuntError, HuntResult},
  pos::Pos,
};

pub trait Gridlike<T> {
  fn width(&self) -> u32;
  fn height(&self) -> u32;
  fn in_bounds(&self, pos: Pos) -> bool;

  fn get(&self, pos: Pos) -> Option<&T>;

  fn iter_row<'a, 'b>(&'a self, row: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a;
}

/// A row-major grid. Index `k` holds position `(k / width, k % width)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
  grid: Vec<T>,
  width: u32,
  height: u32,
}

impl<T> Grid<T> {
  pub fn from_vec(grid: Vec<T>, width: u32, height: u32) -> HuntResult<Self> {
    let expected_size = width as usize * height as usize;
    if grid.len() != expected_size {
      return Err(HuntError::InvalidArgument(format!(
        "Expected grid.len() == expected_size, {} != {expected_size}",
        grid.len()
      )));
    }

    Ok(Self { grid, width, height })
  }

  /// Builds a grid from fixed-size rows, whose shape is known statically.
  pub fn from_rows<const W: usize, const H: usize>(rows: [[T; W]; H]) -> Self {
    Self {
      grid: rows.into_iter().flatten().collect(),
      width: W as u32,
      height: H as u32,
    }
  }

  /// Row-major index of `pos`, or `None` if it lies off the grid.
  pub fn index_of(&self, pos: Pos) -> Option<usize> {
    self
      .in_bounds(pos)
      .then(|| pos.row as usize * self.width as usize + pos.col as usize)
  }

  pub fn pos_of(&self, index: usize) -> Option<Pos> {
    (index < self.grid.len()).then(|| {
      let width = self.width as usize;
      Pos::new((index / width) as i32, (index % width) as i32)
    })
  }

  /// All positions in row-major order.
  pub fn positions(&self) -> impl Iterator<Item = Pos> {
    let width = self.width;
    (0..self.height as i32).flat_map(move |row| (0..width as i32).map(move |col| Pos { row, col }))
  }

  /// In-bounds 8-connected neighbors of `pos`, in `Pos::surrounding` order.
  pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    pos
      .surrounding()
      .filter(move |&neighbor| self.in_bounds(neighbor))
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.grid.iter()
  }

  pub fn len(&self) -> usize {
    self.grid.len()
  }

  pub fn is_empty(&self) -> bool {
    self.grid.is_empty()
  }
}

impl<T> Gridlike<T> for Grid<T> {
  fn width(&self) -> u32 {
    self.width
  }

  fn height(&self) -> u32 {
    self.height
  }

  fn in_bounds(&self, pos: Pos) -> bool {
    pos.row >= 0 && pos.row < self.height() as i32 && pos.col >= 0 && pos.col < self.width() as i32
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self.index_of(pos).and_then(|index| self.grid.get(index))
  }

  fn iter_row<'a, 'b>(&'a self, row: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a,
  {
    let row = row as i32;
    (0..self.width()).flat_map(move |col| self.get(Pos { row, col: col as i32 }))
  }
}

impl<T: Debug> Debug for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    (0..self.height).try_fold((), |_, row| {
      self.iter_row(row).try_fold((), |_, t| write!(f, "{t:?} "))?;
      writeln!(f)
    })
  }
}

/// Rows are separated by newlines and every cell is followed by a space. No
/// newline follows the last row.
impl<T: Display> Display for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    (0..self.height).try_fold((), |_, row| {
      if row > 0 {
        writeln!(f)?;
      }
      self.iter_row(row).try_fold((), |_, t| write!(f, "{t} "))
    })
  }
}
