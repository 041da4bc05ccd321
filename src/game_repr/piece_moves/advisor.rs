use super::super::board::Board;
use super::super::piece::Piece;
use super::{MoveList, DIAGONAL};

impl Board {
    pub(crate) fn advisor_moves_into(&self, piece: &Piece, moves: &mut MoveList) {
        let from = piece.position;
        for (dr, dc) in DIAGONAL {
            match from.offset(dr, dc) {
                Some(to) if to.in_palace(piece.color) => self.push_if_open(piece.color, from, to, moves),
                _ => {}
            }
        }
    }
}
