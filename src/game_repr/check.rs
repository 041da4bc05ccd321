use log::debug;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::moves::{Move, Position};
use super::piece::Color;
use super::piece_moves::MoveList;

/// State of the game from the side to move's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Ongoing,
    Mate { winner: Color },
    Stalemate,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl Board {
    /// Whether any piece of `by` has a pseudo-legal move onto `target`.
    pub fn is_square_attacked(&self, target: Position, by: Color) -> bool {
        let mut buf = MoveList::new();
        for piece in self.pieces_of(by) {
            buf.clear();
            self.piece_moves_into(piece, &mut buf);
            if buf.iter().any(|m| m.to == target) {
                return true;
            }
        }
        false
    }

    /// True when `color`'s General is attacked.
    ///
    /// A board without that General reports `false`.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_general(color) {
            Some(general) => self.is_square_attacked(general, color.opposite()),
            None => {
                debug!("is_in_check: no {:?} general on the board", color);
                false
            }
        }
    }

    /// Make `mv`, test whether it exposes `color`'s General, unmake.
    pub fn leaves_in_check(&mut self, mv: Move, color: Color) -> bool {
        let captured = self.make_move(mv);
        let exposed = self.is_in_check(color);
        self.unmake_move(mv, captured);
        exposed
    }

    /// Pseudo-legal moves that don't leave `color` in check.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut scratch = self.clone();
        let mut moves = self.generate_moves(color);
        moves.retain(|mv| !scratch.leaves_in_check(*mv, color));
        moves
    }

    /// Stops at the first legal move found.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        let mut scratch = self.clone();
        self.generate_moves(color)
            .into_iter()
            .any(|mv| !scratch.leaves_in_check(mv, color))
    }

    pub fn game_outcome(&self, side_to_move: Color) -> GameOutcome {
        if self.has_legal_moves(side_to_move) {
            GameOutcome::Ongoing
        } else if self.is_in_check(side_to_move) {
            GameOutcome::Mate {
                winner: side_to_move.opposite(),
            }
        } else {
            GameOutcome::Stalemate
        }
    }
}
