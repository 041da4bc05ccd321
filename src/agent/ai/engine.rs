//! NegamaxEngine - entry point for asking the AI for a move
//!
//! The engine never touches the caller's board: every request clones it and
//! searches the copy, so a UI can keep rendering the original while the
//! search runs.
//!
//! # Examples
//!
//! ```
//! use xiangqi_engine::agent::ai::{Difficulty, NegamaxEngine};
//! use xiangqi_engine::game_repr::{Board, Color};
//!
//! let board = Board::initial();
//! let engine = NegamaxEngine::default();
//! if let Some(mv) = engine.get_best_move(&board, Color::Red, Difficulty::Easy) {
//!     assert!(board.legal_moves(Color::Red).contains(&mv));
//! }
//! ```

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_repr::{Board, Color, Move};
use super::config::SearchConfig;
use super::difficulty::{adjust_engine_request, AiParams, Difficulty, EngineRequest};
use super::search::{search_with_config, SearchResult};

/// AI player backed by the iterative deepening negamax search
#[derive(Debug, Clone)]
pub struct NegamaxEngine {
    /// Display name, used in logs
    name: String,
    /// Split root moves across the rayon pool
    parallel_root: bool,
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new("AI (Negamax)".to_string())
    }
}

impl NegamaxEngine {
    pub fn new(name: String) -> Self {
        Self {
            name,
            parallel_root: false,
        }
    }

    pub fn with_parallel_root(mut self, parallel_root: bool) -> Self {
        self.parallel_root = parallel_root;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Search a private copy of `board` within the given limits
    ///
    /// # Arguments
    /// * `request` - Depth and time budget
    /// * `rank_root_moves` - Score every root move exactly, for callers that
    ///   want more than the single best move
    pub fn search(&self, board: &Board, color: Color, request: EngineRequest, rank_root_moves: bool) -> SearchResult {
        info!(
            "[{}] searching for {:?}: depth {}, {} ms",
            self.name, color, request.depth, request.time_limit_ms
        );

        let config = SearchConfig {
            parallel_root: self.parallel_root,
            rank_root_moves,
            ..SearchConfig::from(request)
        };
        let mut scratch = board.clone();
        let result = search_with_config(&mut scratch, color, &config);

        debug!(
            "[{}] depth {} nodes {} score {} in {} ms",
            self.name, result.depth, result.nodes_searched, result.score, result.time_ms
        );
        result
    }

    /// Best move for `color` at the given tier, or `None` when there is none
    /// or the budget ran out before depth 1 finished.
    pub fn get_best_move(&self, board: &Board, color: Color, difficulty: Difficulty) -> Option<Move> {
        let request = adjust_engine_request(&AiParams::new(difficulty));
        self.search(board, color, request, false).best_move
    }

    /// Pick a move using the controller's parameters
    ///
    /// With probability `error_probability` a random legal move is played.
    /// Otherwise, with probability `randomness`, the second-best root move is
    /// played when there is one. Otherwise the best move. If the search runs
    /// out of time before finishing depth 1, falls back to a random legal move.
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        color: Color,
        params: &AiParams,
        rng: &mut R,
    ) -> Option<Move> {
        if roll(rng, params.error_probability) {
            debug!("[{}] deliberate error, playing a random move", self.name);
            return random_legal_move(board, color, rng);
        }

        let request = adjust_engine_request(params);
        let want_alternatives = params.randomness > 0.0;
        let result = self.search(board, color, request, want_alternatives);

        let Some(best) = result.best_move else {
            if result.outcome.is_over() {
                return None;
            }
            return random_legal_move(board, color, rng);
        };

        if want_alternatives && result.ranked_moves.len() > 1 && roll(rng, params.randomness) {
            let (second, score) = result.ranked_moves[1];
            debug!("[{}] playing second choice {} ({}) over {}", self.name, second, score, best);
            return Some(second);
        }
        Some(best)
    }
}

/// `true` with probability `p`; anything at or below 0 (or NaN) never fires
fn roll<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    p > 0.0 && rng.gen_bool(p.min(1.0))
}

/// Best move for `color` using a default engine
pub fn get_best_move(board: &Board, color: Color, difficulty: Difficulty) -> Option<Move> {
    NegamaxEngine::default().get_best_move(board, color, difficulty)
}

/// Uniformly random legal move, `None` if `color` has none
pub fn random_legal_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    board.legal_moves(color).choose(rng).copied()
}
