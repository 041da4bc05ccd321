use super::super::board::Board;
use super::super::piece::Piece;
use super::MoveList;

/// (row delta, col delta) of each jump paired with the leg square it passes.
const JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((-2, -1), (-1, 0)),
    ((-2, 1), (-1, 0)),
    ((2, -1), (1, 0)),
    ((2, 1), (1, 0)),
    ((-1, -2), (0, -1)),
    ((1, -2), (0, -1)),
    ((-1, 2), (0, 1)),
    ((1, 2), (0, 1)),
];

impl Board {
    pub(crate) fn horse_moves_into(&self, piece: &Piece, moves: &mut MoveList) {
        let from = piece.position;
        for ((dr, dc), (lr, lc)) in JUMPS {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            // hobbled horse
            let leg_open = from.offset(lr, lc).map_or(false, |leg| self.is_empty(leg));
            if leg_open {
                self.push_if_open(piece.color, from, to, moves);
            }
        }
    }
}
