use super::super::board::Board;
use super::super::piece::Piece;
use super::{MoveList, ORTHOGONAL};

impl Board {
    /// One orthogonal step, confined to the palace.
    pub(crate) fn general_moves_into(&self, piece: &Piece, moves: &mut MoveList) {
        let from = piece.position;
        for (dr, dc) in ORTHOGONAL {
            if let Some(to) = from.offset(dr, dc) {
                if to.in_palace(piece.color) {
                    self.push_if_open(piece.color, from, to, moves);
                }
            }
        }
    }
}
