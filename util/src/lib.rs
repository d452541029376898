pub mod error;
pub mod grid;
pub mod pos;
pub mod text;
pub mod time;
