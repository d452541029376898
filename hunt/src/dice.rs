use rand::{seq::SliceRandom, Rng};
use util::error::{HuntError, HuntResult};

use crate::board::Board;

type Die = [&'static str; 6];

/// The sixteen cubes of a standard 4x4 set. "QU" is a single face.
const DICE: [Die; 16] = [
  ["A", "A", "E", "E", "G", "N"],
  ["A", "B", "B", "J", "O", "O"],
  ["A", "C", "H", "O", "P", "S"],
  ["A", "F", "F", "K", "P", "S"],
  ["A", "O", "O", "T", "T", "W"],
  ["C", "I", "M", "O", "T", "U"],
  ["D", "E", "I", "L", "R", "X"],
  ["D", "E", "L", "R", "V", "Y"],
  ["D", "I", "S", "T", "T", "Y"],
  ["E", "E", "G", "H", "N", "W"],
  ["E", "E", "I", "N", "S", "U"],
  ["E", "H", "R", "T", "V", "W"],
  ["E", "I", "O", "S", "S", "T"],
  ["E", "L", "R", "T", "T", "Y"],
  ["H", "I", "M", "N", "QU", "U"],
  ["H", "L", "N", "N", "R", "Z"],
];

impl Board {
  /// Rolls a `side` x `side` board. Dice are shuffled into cells and each
  /// shows one face; boards larger than 4x4 reuse the set cyclically.
  pub fn random<R: Rng>(side: usize, rng: &mut R) -> HuntResult<Self> {
    if side == 0 {
      return Err(HuntError::InvalidArgument(
        "random board side must be at least 1".to_owned(),
      ));
    }

    let mut dice: Vec<&Die> = DICE.iter().cycle().take(side * side).collect();
    dice.shuffle(rng);
    Self::from_tiles(dice.into_iter().map(|die| die[rng.random_range(0..die.len())]))
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};
  use util::error::HuntError;

  use crate::board::Board;

  use super::DICE;

  #[gtest]
  fn test_random_board_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    for side in 1..=6 {
      let board = Board::random(side, &mut rng).unwrap();
      expect_that!(board.side(), eq(side));
      expect_that!(board.len(), eq(side * side));
    }
  }

  #[gtest]
  fn test_random_board_uses_die_faces() {
    let mut rng = StdRng::seed_from_u64(42);
    let board = Board::random(4, &mut rng).unwrap();
    for tile in board.tiles() {
      expect_true!(DICE.iter().any(|die| die.contains(&tile)));
    }
  }

  #[gtest]
  fn test_random_board_reproducible() {
    let first = Board::random(5, &mut StdRng::seed_from_u64(3)).unwrap();
    let second = Board::random(5, &mut StdRng::seed_from_u64(3)).unwrap();
    expect_that!(first, eq(&second));
  }

  #[gtest]
  fn test_zero_side() {
    let result = Board::random(0, &mut StdRng::seed_from_u64(0));
    expect_true!(matches!(result, Err(HuntError::InvalidArgument(_))));
  }
}
