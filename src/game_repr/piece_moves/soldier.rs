use super::super::board::Board;
use super::super::piece::Piece;
use super::MoveList;

impl Board {
    /// Forward only until the river is crossed, then sideways as well.
    pub(crate) fn soldier_moves_into(&self, piece: &Piece, moves: &mut MoveList) {
        let from = piece.position;
        let color = piece.color;
        if let Some(to) = from.offset(color.forward(), 0) {
            self.push_if_open(color, from, to, moves);
        }
        if !from.on_home_side(color) {
            for dc in [-1, 1] {
                if let Some(to) = from.offset(0, dc) {
                    self.push_if_open(color, from, to, moves);
                }
            }
        }
    }
}
