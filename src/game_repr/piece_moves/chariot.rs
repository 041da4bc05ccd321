use super::super::board::Board;
use super::super::moves::Move;
use super::super::piece::Piece;
use super::{MoveList, ORTHOGONAL};

impl Board {
    /// Slides until blocked, capturing the first enemy on each ray.
    pub(crate) fn chariot_moves_into(&self, piece: &Piece, moves: &mut MoveList) {
        let from = piece.position;
        for (dr, dc) in ORTHOGONAL {
            let mut cur = from;
            while let Some(to) = cur.offset(dr, dc) {
                match self.get(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(p) => {
                        if p.color != piece.color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                cur = to;
            }
        }
    }
}
