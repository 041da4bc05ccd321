use super::super::board::Board;
use super::super::moves::Move;
use super::super::piece::Piece;
use super::{MoveList, ORTHOGONAL};

impl Board {
    /// Moves like a chariot over empty cells but captures only by jumping
    /// exactly one screen piece, of either color.
    pub(crate) fn cannon_moves_into(&self, piece: &Piece, moves: &mut MoveList) {
        let from = piece.position;
        for (dr, dc) in ORTHOGONAL {
            let mut cur = from;
            let mut screened = false;
            while let Some(to) = cur.offset(dr, dc) {
                cur = to;
                match (self.get(to), screened) {
                    (None, false) => moves.push(Move::new(from, to)),
                    (None, true) => {}
                    (Some(_), false) => screened = true,
                    (Some(target), true) => {
                        if target.color != piece.color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }
}
