// Iterative Deepening Search Orchestrator
//
// Searches depth 1, 2, ... up to max_depth against one wall-clock budget.
// Only a depth that ran to completion may replace the previous answer; a
// depth cut short by the deadline is thrown away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game_repr::{Board, Color, GameOutcome, Move};
use super::config::SearchConfig;
use super::move_ordering::{promote_move, sort_moves};
use super::negamax::{alpha_beta, INFINITY, MATE_DEPTH_BIAS, MATE_SCORE};

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
    /// Root moves with their scores from the last completed depth, best first
    pub ranked_moves: Vec<(Move, i32)>,
    pub outcome: GameOutcome,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes_searched: 0,
            time_ms: 0,
            ranked_moves: Vec::new(),
            outcome: GameOutcome::Ongoing,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Node counter and cancellation state threaded through the recursion.
pub struct SearchContext {
    pub nodes: u64,
    start: Instant,
    deadline: Option<Instant>,
    check_interval: u64,
    stop: Arc<AtomicBool>,
}

impl SearchContext {
    pub fn new(time_limit_ms: Option<u64>, check_interval: u64) -> Self {
        let start = Instant::now();
        Self {
            nodes: 0,
            start,
            deadline: time_limit_ms.map(|ms| start + Duration::from_millis(ms)),
            check_interval: check_interval.max(1),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A fresh counter sharing this context's deadline and stop flag
    fn share(&self) -> Self {
        Self {
            nodes: 0,
            start: self.start,
            deadline: self.deadline,
            check_interval: self.check_interval,
            stop: Arc::clone(&self.stop),
        }
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Count a node. Every `check_interval` nodes the deadline is consulted.
    /// Returns true once the search has been stopped.
    #[inline]
    pub fn visit(&mut self) -> bool {
        self.nodes += 1;
        if self.nodes % self.check_interval == 0 {
            return self.is_time_up();
        }
        self.stopped()
    }

    /// Checks the deadline now, raising the stop flag if it has passed
    pub fn is_time_up(&self) -> bool {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stop.store(true, Ordering::Relaxed);
            }
        }
        self.stopped()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Outcome of one completed root iteration
struct RootResult {
    best_move: Option<Move>,
    score: i32,
    ranked: Vec<(Move, i32)>,
}

impl RootResult {
    /// Pick the best of `scored` (first wins ties) and rank the rest
    fn from_scores(mut ranked: Vec<(Move, i32)>) -> Self {
        let mut best_move = None;
        let mut score = -INFINITY;
        for &(mv, s) in &ranked {
            if s > score {
                score = s;
                best_move = Some(mv);
            }
        }
        ranked.sort_by_key(|&(_, s)| std::cmp::Reverse(s));
        Self {
            best_move,
            score,
            ranked,
        }
    }
}

/// Search every root move to `depth` on one thread.
/// Returns `None` if the deadline interrupted the iteration.
fn search_root(
    board: &mut Board,
    root_moves: &[Move],
    depth: u8,
    color: Color,
    full_window: bool,
    ctx: &mut SearchContext,
) -> Option<RootResult> {
    let mut alpha = -INFINITY;
    let mut scored = Vec::with_capacity(root_moves.len());

    for &mv in root_moves {
        if ctx.is_time_up() {
            return None;
        }
        let window_alpha = if full_window { -INFINITY } else { alpha };

        let captured = board.make_move(mv);
        let score = -alpha_beta(board, depth - 1, -INFINITY, -window_alpha, color.opposite(), ctx);
        board.unmake_move(mv, captured);

        if ctx.stopped() {
            return None;
        }
        scored.push((mv, score));
        if score > alpha {
            alpha = score;
        }
    }

    Some(RootResult::from_scores(scored))
}

/// Root-split search: each root move gets its own board clone and counter,
/// sharing only the deadline and the stop flag. Always full-window.
fn search_root_parallel(
    board: &Board,
    root_moves: &[Move],
    depth: u8,
    color: Color,
    ctx: &mut SearchContext,
) -> Option<RootResult> {
    let shared = &*ctx;
    let results: Vec<Option<(Move, i32, u64)>> = root_moves
        .par_iter()
        .map(|&mv| {
            let mut local = shared.share();
            if local.is_time_up() {
                return None;
            }
            let mut child = board.clone();
            child.make_move(mv);
            let score = -alpha_beta(&mut child, depth - 1, -INFINITY, INFINITY, color.opposite(), &mut local);
            if local.stopped() {
                None
            } else {
                Some((mv, score, local.nodes))
            }
        })
        .collect();

    let mut scored = Vec::with_capacity(results.len());
    for result in results {
        let (mv, score, nodes) = result?;
        ctx.nodes += nodes;
        scored.push((mv, score));
    }
    Some(RootResult::from_scores(scored))
}

/// Perform iterative deepening search with the given configuration
///
/// The board is used as scratch space and is restored before returning.
pub fn search_with_config(board: &mut Board, color: Color, config: &SearchConfig) -> SearchResult {
    let mut ctx = SearchContext::new(config.time_limit_ms, config.check_interval);
    let mut best_result = SearchResult::new();

    let mut root_moves = board.legal_moves(color);
    if root_moves.is_empty() {
        if board.is_in_check(color) {
            best_result.score = -MATE_SCORE;
            best_result.outcome = GameOutcome::Mate {
                winner: color.opposite(),
            };
        } else {
            best_result.outcome = GameOutcome::Stalemate;
        }
        return best_result;
    }
    sort_moves(board, &mut root_moves);

    // Ensure we search at least depth 1
    let max_depth = config.max_depth.max(1);
    let mut pv_move: Option<Move> = None;

    for depth in 1..=max_depth {
        if ctx.is_time_up() {
            break;
        }
        promote_move(&mut root_moves, pv_move);

        let root = if config.parallel_root {
            search_root_parallel(board, &root_moves, depth, color, &mut ctx)
        } else {
            search_root(board, &root_moves, depth, color, config.rank_root_moves, &mut ctx)
        };
        let Some(root) = root else {
            debug!(
                "depth {} aborted after {} ms, keeping depth {}",
                depth,
                ctx.elapsed_ms(),
                best_result.depth
            );
            break;
        };

        best_result.best_move = root.best_move;
        best_result.score = root.score;
        best_result.depth = depth;
        best_result.ranked_moves = root.ranked;
        pv_move = root.best_move;

        debug!(
            "info depth {} score {} nodes {} time {} pv {}",
            depth,
            root.score,
            ctx.nodes,
            ctx.elapsed_ms(),
            root.best_move.map_or_else(|| "-".to_string(), |m| m.to_string())
        );

        // A forced mate won't get any better with more depth
        if root.score.abs() > MATE_SCORE - MATE_DEPTH_BIAS {
            break;
        }
    }

    best_result.nodes_searched = ctx.nodes;
    best_result.time_ms = ctx.elapsed_ms();
    best_result
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `board` - Board to search; restored before returning
/// * `color` - Color to move
/// * `max_depth` - Maximum search depth
/// * `time_limit_ms` - Optional time limit in milliseconds
///
/// # Returns
/// SearchResult from the deepest completed iteration
pub fn iterative_deepening_search(
    board: &mut Board,
    color: Color,
    max_depth: u8,
    time_limit_ms: Option<u64>,
) -> SearchResult {
    let config = SearchConfig {
        max_depth,
        time_limit_ms,
        ..SearchConfig::default()
    };
    search_with_config(board, color, &config)
}
