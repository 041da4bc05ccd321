use super::super::board::Board;
use super::super::piece::Piece;
use super::{MoveList, DIAGONAL};

impl Board {
    /// Two diagonal steps on the home side of the river.
    /// Blocked when the midpoint ("eye") is occupied.
    pub(crate) fn elephant_moves_into(&self, piece: &Piece, moves: &mut MoveList) {
        let from = piece.position;
        for (dr, dc) in DIAGONAL {
            let Some(to) = from.offset(dr * 2, dc * 2) else {
                continue;
            };
            if !to.on_home_side(piece.color) {
                continue;
            }
            let eye_open = from.offset(dr, dc).map_or(false, |eye| self.is_empty(eye));
            if eye_open {
                self.push_if_open(piece.color, from, to, moves);
            }
        }
    }
}
