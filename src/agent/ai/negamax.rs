// Negamax Search with Alpha-Beta Pruning
//
// One function serves both sides by negating the child's score:
// max(a, b) = -min(-a, -b). Fail-hard: scores are clamped to [alpha, beta].
//
// Legality is checked lazily. Every pseudo-legal move is made, and the
// ones that leave the mover's General attacked are undone and skipped.

use crate::game_repr::{Board, Color};
use super::move_ordering::generate_ordered_moves;
use super::quiescence::quiescence;
use super::search::SearchContext;

/// Checkmate score. Actual mate scores are offset by the remaining depth.
pub const MATE_SCORE: i32 = 100_000;

/// Bounds the search window, beyond any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Mate scores are `MATE_SCORE - (MATE_DEPTH_BIAS - depth)` so nearer mates rank higher
pub const MATE_DEPTH_BIAS: i32 = 100;

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `board` - Current board (mutable for make/unmake moves)
/// * `depth` - Remaining search depth (0 = leaf node, call quiescence)
/// * `mut alpha` - Lower bound (best score the side to move can guarantee)
/// * `beta` - Upper bound (best score opponent will allow)
/// * `turn` - Side to move
/// * `ctx` - Node counter and deadline shared by the whole search
///
/// # Returns
///
/// Score from the perspective of `turn`. Returns 0 once the search has been
/// stopped; callers must check `ctx.stopped()` before trusting it.
pub fn alpha_beta(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    turn: Color,
    ctx: &mut SearchContext,
) -> i32 {
    if ctx.visit() {
        return 0;
    }

    if depth == 0 {
        return quiescence(board, alpha, beta, turn, ctx);
    }

    let moves = generate_ordered_moves(board, turn);
    let mut legal_moves = 0;

    for mv in moves {
        let captured = board.make_move(mv);
        if board.is_in_check(turn) {
            board.unmake_move(mv, captured);
            continue;
        }
        legal_moves += 1;

        let score = -alpha_beta(board, depth - 1, -beta, -alpha, turn.opposite(), ctx);
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

    if legal_moves == 0 {
        return if board.is_in_check(turn) {
            -MATE_SCORE + (MATE_DEPTH_BIAS - depth as i32)
        } else {
            0
        };
    }

    alpha
}
