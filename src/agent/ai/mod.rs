// AI Agent - Negamax with Alpha-Beta Pruning
//
// Classical search for Xiangqi: iterative deepening over a fail-hard
// negamax, quiescence on captures past the horizon, material plus
// piece-square evaluation. A difficulty controller sits on top and
// tunes depth, time and deliberate imprecision per game.

mod config;
mod difficulty;
mod engine;
mod evaluation;
mod move_ordering;
mod negamax;
mod piece_square_tables;
mod quiescence;
mod search;

#[cfg(test)]
mod tests;

pub use config::{SearchConfig, CHECK_INTERVAL};
pub use difficulty::{
    adjust_engine_request, get_ai_params, AiParams, Difficulty, EngineRequest, MatchContext,
    ParseDifficultyError, TournamentFormat, ENGINE_COLOR, FAIRNESS_THRESHOLD, MAX_DEPTH,
    MERCY_RANDOMNESS, MIN_DEPTH,
};
pub use engine::{get_best_move, random_legal_move, NegamaxEngine};
pub use evaluation::{evaluate, evaluate_board, piece_value};
pub use move_ordering::{generate_ordered_captures, generate_ordered_moves, sort_moves};
pub use negamax::{alpha_beta, INFINITY, MATE_DEPTH_BIAS, MATE_SCORE};
pub use quiescence::quiescence;
pub use search::{iterative_deepening_search, search_with_config, SearchContext, SearchResult};
