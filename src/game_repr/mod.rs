mod board;
mod check;
mod error;
mod moves;
mod piece;
mod piece_moves;

#[cfg(test)]
mod tests;

pub use board::*;
pub use check::*;
pub use error::*;
pub use moves::*;
pub use piece::*;
pub use piece_moves::MoveList;
