use thiserror::Error;

use super::moves::Position;

/// Errors from assembling a board piece by piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position (row {row}, col {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("cell {0} is already occupied")]
    Occupied(Position),

    #[error("cell {0} is empty")]
    Empty(Position),
}
