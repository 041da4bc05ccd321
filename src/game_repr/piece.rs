use serde::{Deserialize, Serialize};

use super::moves::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

impl Type {
    /// Lowercase letter used by the board text encoding.
    pub fn to_char(self) -> char {
        match self {
            Type::General => 'k',
            Type::Advisor => 'a',
            Type::Elephant => 'b',
            Type::Horse => 'n',
            Type::Chariot => 'r',
            Type::Cannon => 'c',
            Type::Soldier => 'p',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Row delta of a forward step for this side's soldiers.
    pub fn forward(&self) -> i8 {
        match self {
            Self::Red => -1,
            Self::Black => 1,
        }
    }

    /// Side-to-move marker in the board text encoding.
    pub fn to_char(&self) -> char {
        match self {
            Self::Red => 'w',
            Self::Black => 'b',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Stable identity, assigned once when the piece is put on the board
    pub id: u8,
    pub piece_type: Type,
    pub color: Color,
    /// Always equal to the cell the piece occupies
    pub position: Position,
}

impl Piece {
    pub fn new(id: u8, piece_type: Type, color: Color, position: Position) -> Self {
        Self {
            id,
            piece_type,
            color,
            position,
        }
    }

    /// Uppercase for RED, lowercase for BLACK.
    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}
