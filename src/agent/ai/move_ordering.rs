// Move ordering: most valuable victim first

use crate::game_repr::{Board, Color, Move, MoveList};
use super::evaluation::piece_value;

/// Score a single move for ordering purposes
/// Captures score ten times the victim's value, quiet moves score 0.
#[inline]
pub fn score_move(board: &Board, mov: Move) -> i32 {
    board
        .get(mov.to)
        .map_or(0, |victim| piece_value(victim.piece_type) * 10)
}

/// Sort moves by score, descending. Equal scores keep their generation order.
pub fn sort_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mov| -score_move(board, mov));
}

/// All pseudo-legal moves for `color`, captures of big pieces first
pub fn generate_ordered_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = board.generate_moves(color);
    sort_moves(board, &mut moves);
    moves
}

/// Pseudo-legal captures only, ordered like `generate_ordered_moves`
pub fn generate_ordered_captures(board: &Board, color: Color) -> MoveList {
    let mut moves = board.generate_moves(color);
    moves.retain(|mov| board.get(mov.to).is_some());
    sort_moves(board, &mut moves);
    moves
}

/// Move `pv` to the front of `moves` if it is present
pub fn promote_move(moves: &mut [Move], pv: Option<Move>) {
    if let Some(pv) = pv {
        if let Some(idx) = moves.iter().position(|&m| m == pv) {
            moves[..=idx].rotate_right(1);
        }
    }
}
