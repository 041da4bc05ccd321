use std::fmt;

use serde::{Deserialize, Serialize};

use super::piece::Color;

pub const ROWS: usize = 10;
pub const COLS: usize = 9;

/*-------COORDINATES--------*/

// row 0 is BLACK's back rank (top), row 9 is RED's.
// The river runs between rows 4 and 5.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(&self) -> bool {
        (self.row as usize) < ROWS && (self.col as usize) < COLS
    }

    /// Step by `(dr, dc)`, or `None` when that leaves the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 || row >= ROWS as i8 || col >= COLS as i8 {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }

    /// Columns 3-5, rows 7-9 for RED and 0-2 for BLACK.
    pub fn in_palace(&self, color: Color) -> bool {
        let rows_ok = match color {
            Color::Red => (7..=9).contains(&self.row),
            Color::Black => self.row <= 2,
        };
        rows_ok && (3..=5).contains(&self.col)
    }

    /// True while the square is on `color`'s own side of the river.
    pub fn on_home_side(&self, color: Color) -> bool {
        match color {
            Color::Red => self.row >= 5,
            Color::Black => self.row <= 4,
        }
    }
}

impl fmt::Display for Position {
    // ICCS style: files a-i left to right, ranks 0-9 from RED's side
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{}{}", file, 9 - self.row as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
