#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod board;
pub mod dice;
pub mod game;
pub mod score;
pub mod search;

pub use board::Board;
pub use game::WordHunt;
pub use search::{SearchStats, Searcher};
