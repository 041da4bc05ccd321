use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::moves::{Move, Position, COLS, ROWS};
use super::piece::{Color, Piece, Type};

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD REPRESENTATION AND MAKE/UNMAKE
 */

/// Back rank order, left to right, shared by both sides.
const BACK_RANK: [Type; COLS] = [
    Type::Chariot,
    Type::Horse,
    Type::Elephant,
    Type::Advisor,
    Type::General,
    Type::Advisor,
    Type::Elephant,
    Type::Horse,
    Type::Chariot,
];
const CANNON_COLS: [u8; 2] = [1, 7];
const SOLDIER_COLS: [u8; 5] = [0, 2, 4, 6, 8];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Standard opening layout. RED gets ids 0-15 and BLACK 16-31.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        let mut id = 0u8;
        for color in [Color::Red, Color::Black] {
            // (back rank, cannon row, soldier row)
            let (back, cannons, soldiers) = match color {
                Color::Red => (9, 7, 6),
                Color::Black => (0, 2, 3),
            };
            for (col, piece_type) in BACK_RANK.iter().enumerate() {
                board.put(Piece::new(id, *piece_type, color, Position::new(back, col as u8)));
                id += 1;
            }
            for col in CANNON_COLS {
                board.put(Piece::new(id, Type::Cannon, color, Position::new(cannons, col)));
                id += 1;
            }
            for col in SOLDIER_COLS {
                board.put(Piece::new(id, Type::Soldier, color, Position::new(soldiers, col)));
                id += 1;
            }
        }
        board
    }

    fn put(&mut self, piece: Piece) {
        let Position { row, col } = piece.position;
        self.cells[row as usize][col as usize] = Some(piece);
    }

    /// Smallest id not held by a piece on the board. A free cell exists,
    /// so fewer than `ROWS * COLS` ids are taken and one is always left.
    fn free_id(&self) -> u8 {
        let mut used = [false; ROWS * COLS];
        for piece in self.pieces() {
            if let Some(slot) = used.get_mut(piece.id as usize) {
                *slot = true;
            }
        }
        used.iter().position(|&taken| !taken).unwrap_or(0) as u8
    }

    /// Place a new piece, assigning it the smallest free id.
    pub fn place(&mut self, piece_type: Type, color: Color, position: Position) -> Result<Piece, BoardError> {
        if !position.is_valid() {
            return Err(BoardError::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        }
        if self.get(position).is_some() {
            return Err(BoardError::Occupied(position));
        }
        let id = self.free_id();
        let piece = Piece::new(id, piece_type, color, position);
        self.put(piece);
        Ok(piece)
    }

    pub fn remove(&mut self, position: Position) -> Result<Piece, BoardError> {
        if !position.is_valid() {
            return Err(BoardError::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        }
        self.cells[position.row as usize][position.col as usize]
            .take()
            .ok_or(BoardError::Empty(position))
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.cells
            .get(position.row as usize)
            .and_then(|row| row.get(position.col as usize))
            .copied()
            .flatten()
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flat_map(|row| row.iter().flatten())
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn find_general(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|p| p.piece_type == Type::General)
            .map(|p| p.position)
    }

    /// Apply `mv` in place, returning whatever stood on the destination.
    ///
    /// The move is not validated; the caller must pass a move generated for
    /// this board.
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let from = &mut self.cells[mv.from.row as usize][mv.from.col as usize];
        let Some(mut piece) = from.take() else {
            debug_assert!(false, "make_move from empty cell {}", mv.from);
            return None;
        };
        piece.position = mv.to;
        self.cells[mv.to.row as usize][mv.to.col as usize].replace(piece)
    }

    /// Undo a `make_move`, putting `captured` back on the destination.
    pub fn unmake_move(&mut self, mv: Move, captured: Option<Piece>) {
        let to = &mut self.cells[mv.to.row as usize][mv.to.col as usize];
        if let Some(mut piece) = to.take() {
            piece.position = mv.from;
            self.cells[mv.from.row as usize][mv.from.col as usize] = Some(piece);
        }
        self.cells[mv.to.row as usize][mv.to.col as usize] = captured;
    }

    /// FEN-like snapshot: rows top to bottom joined by `/`, then the side to move.
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mut fen = String::with_capacity(96);
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for cell in row {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
        }
        fen.push(' ');
        fen.push(side_to_move.to_char());
        fen.push_str(" - - 0 1");
        fen
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", 9 - r)?;
            for cell in row {
                let c = cell.map(|p| p.to_char()).unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
            if r == 4 {
                writeln!(f, "   ~~~~~~~~~~~~~~~~~")?;
            }
        }
        write!(f, "   a b c d e f g h i")
    }
}
