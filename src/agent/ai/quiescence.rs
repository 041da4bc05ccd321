// Quiescence Search - Tactical Stability Extension
//
// Stopping the main search in the middle of an exchange makes the static
// evaluation lie. Past the horizon only captures are searched, until the
// position is quiet. There is no depth cap: every capture removes material,
// so the recursion is finite.

use crate::game_repr::{Board, Color};
use super::evaluation::evaluate;
use super::move_ordering::generate_ordered_captures;
use super::search::SearchContext;

/// Quiescence search - search captures until the position is quiet
///
/// # Arguments
///
/// * `board` - Current board (mutable for make/unmake moves)
/// * `mut alpha` - Lower bound
/// * `beta` - Upper bound
/// * `turn` - Side to move
/// * `ctx` - Node counter and deadline shared by the whole search
///
/// # Returns
///
/// Score from the perspective of `turn`, clamped to `[alpha, beta]`
pub fn quiescence(
    board: &mut Board,
    mut alpha: i32,
    beta: i32,
    turn: Color,
    ctx: &mut SearchContext,
) -> i32 {
    if ctx.visit() {
        return 0;
    }

    // Stand pat: the side to move may decline every capture
    let stand_pat = evaluate(board, turn);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    for mv in generate_ordered_captures(board, turn) {
        let captured = board.make_move(mv);
        if board.is_in_check(turn) {
            board.unmake_move(mv, captured);
            continue;
        }

        let score = -quiescence(board, -beta, -alpha, turn.opposite(), ctx);
        board.unmake_move(mv, captured);

        if ctx.stopped() {
            return 0;
        }
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
