pub mod general;
pub mod advisor;
pub mod elephant;
pub mod horse;
pub mod chariot;
pub mod cannon;
pub mod soldier;

use smallvec::SmallVec;

use super::board::Board;
use super::moves::{Move, Position};
use super::piece::{Color, Piece, Type};

/// Move buffer sized for a typical middlegame; spills to the heap past that.
pub type MoveList = SmallVec<[Move; 64]>;

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Push `from -> to` unless `to` holds a piece of `color`.
    #[inline]
    pub(crate) fn push_if_open(&self, color: Color, from: Position, to: Position, moves: &mut MoveList) {
        match self.get(to) {
            Some(p) if p.color == color => {}
            _ => moves.push(Move::new(from, to)),
        }
    }

    /// Pseudo-legal moves of one piece, appended to `moves`.
    pub fn piece_moves_into(&self, piece: &Piece, moves: &mut MoveList) {
        match piece.piece_type {
            Type::General => self.general_moves_into(piece, moves),
            Type::Advisor => self.advisor_moves_into(piece, moves),
            Type::Elephant => self.elephant_moves_into(piece, moves),
            Type::Horse => self.horse_moves_into(piece, moves),
            Type::Chariot => self.chariot_moves_into(piece, moves),
            Type::Cannon => self.cannon_moves_into(piece, moves),
            Type::Soldier => self.soldier_moves_into(piece, moves),
        }
    }

    /// Pseudo-legal moves of the piece on `position`; empty if the cell is.
    pub fn piece_moves(&self, position: Position) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.get(position) {
            self.piece_moves_into(&piece, &mut moves);
        }
        moves
    }

    pub fn generate_moves_into(&self, color: Color, moves: &mut MoveList) {
        for piece in self.pieces_of(color) {
            self.piece_moves_into(piece, moves);
        }
    }

    /// All pseudo-legal moves for `color`. May leave its own General attacked.
    pub fn generate_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_moves_into(color, &mut moves);
        moves
    }
}
