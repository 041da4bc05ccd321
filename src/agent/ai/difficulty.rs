//! Difficulty tiers and the controller that tunes them per game.
//!
//! A base tier is first replaced by one derived from the opponent's strength
//! in league play, then nudged by a fairness check on the current board: the
//! engine eases off when it is far ahead ("mercy") and digs in when it is far
//! behind ("try-hard").

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game_repr::{Board, Color};
use super::evaluation::evaluate;

/// Side the engine is assumed to play when judging fairness
pub const ENGINE_COLOR: Color = Color::Black;

/// Evaluation gap beyond which mercy or try-hard mode kicks in
pub const FAIRNESS_THRESHOLD: i32 = 800;

/// Minimum randomness while in mercy mode
pub const MERCY_RANDOMNESS: f64 = 0.2;

/// Search depth clamp applied after adjustments
pub const MIN_DEPTH: u8 = 2;
pub const MAX_DEPTH: u8 = 8;

/// AI difficulty levels that map to search depth and time controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Depth 2, half a second
    Easy,
    /// Depth 4, 1.5 seconds
    #[default]
    Medium,
    /// Depth 6, 3 seconds
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Get the maximum search depth for this difficulty level
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Get the time limit in milliseconds for this difficulty level
    pub fn time_limit_ms(&self) -> u64 {
        match self {
            Difficulty::Easy => 500,
            Difficulty::Medium => 1500,
            Difficulty::Hard => 3000,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentFormat {
    /// League play: the tier follows the opponent's strength
    RoundRobin,
    /// Cup play: the caller's tier is kept
    Knockout,
}

/// Who the engine is playing and in what kind of event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchContext {
    /// 1 (weakest) to 10 (strongest)
    pub opponent_strength: u8,
    pub format: TournamentFormat,
}

/// Tuning produced by the controller for one move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiParams {
    pub difficulty: Difficulty,
    /// Added to the tier's base depth, one of -1, 0 or 1
    pub depth_adjustment: i8,
    /// Chance of playing the second-best root move, in [0, 1]
    pub randomness: f64,
    /// Chance of playing a random legal move, in [0, 0.2]
    pub error_probability: f64,
}

impl AiParams {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            depth_adjustment: 0,
            randomness: 0.0,
            error_probability: 0.0,
        }
    }
}

/// Concrete search limits handed to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineRequest {
    pub depth: u8,
    pub time_limit_ms: u64,
}

/// Tier and blunder rate for a league opponent of the given strength
fn league_tier(opponent_strength: u8) -> (Difficulty, f64) {
    match opponent_strength {
        8..=u8::MAX => (Difficulty::Hard, 0.01),
        5..=7 => (Difficulty::Medium, 0.05),
        _ => (Difficulty::Easy, 0.20),
    }
}

/// Derive the AI parameters for the next engine move
///
/// # Arguments
/// * `board` - Current board, judged from `ENGINE_COLOR`'s side
/// * `base_difficulty` - Tier requested by the caller
/// * `match_context` - Opponent and event format, if any
pub fn get_ai_params(board: &Board, base_difficulty: Difficulty, match_context: Option<&MatchContext>) -> AiParams {
    let mut params = AiParams::new(base_difficulty);

    if let Some(ctx) = match_context {
        if ctx.format == TournamentFormat::RoundRobin {
            let (difficulty, error_probability) = league_tier(ctx.opponent_strength);
            params.difficulty = difficulty;
            params.error_probability = error_probability;
        }
    }

    let advantage = evaluate(board, ENGINE_COLOR);
    if advantage > FAIRNESS_THRESHOLD {
        debug!("mercy mode: engine ahead by {}", advantage);
        params.randomness = params.randomness.max(MERCY_RANDOMNESS);
    } else if advantage < -FAIRNESS_THRESHOLD {
        debug!("try-hard mode: engine behind by {}", -advantage);
        params.depth_adjustment = 1;
        params.randomness = 0.0;
        params.error_probability = 0.0;
    }

    params
}

/// Map the resolved tier plus adjustments to search limits
pub fn adjust_engine_request(params: &AiParams) -> EngineRequest {
    let base = params.difficulty.max_depth() as i16;
    let depth = (base + params.depth_adjustment as i16).clamp(MIN_DEPTH as i16, MAX_DEPTH as i16) as u8;
    EngineRequest {
        depth,
        time_limit_ms: params.difficulty.time_limit_ms(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::evaluation::evaluate_board;
    use crate::game_repr::Position;

    fn league(strength: u8) -> MatchContext {
        MatchContext {
            opponent_strength: strength,
            format: TournamentFormat::RoundRobin,
        }
    }

    /// Opening position with the given side's chariots taken off
    fn without_chariots(color: Color) -> Board {
        let mut board = Board::initial();
        let row = if color == Color::Red { 9 } else { 0 };
        board.remove(Position::new(row, 0)).unwrap();
        board.remove(Position::new(row, 8)).unwrap();
        board
    }

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.max_depth(), 2);
        assert_eq!(Difficulty::Medium.max_depth(), 4);
        assert_eq!(Difficulty::Hard.max_depth(), 6);
        assert_eq!(Difficulty::Hard.time_limit_ms(), 3000);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" Easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_strong_league_opponent_gets_hard() {
        let params = get_ai_params(&Board::initial(), Difficulty::Easy, Some(&league(9)));
        assert_eq!(params.difficulty, Difficulty::Hard);
        assert_eq!(params.error_probability, 0.01);
        assert_eq!(params.randomness, 0.0);
        assert_eq!(params.depth_adjustment, 0);
    }

    #[test]
    fn test_league_tiers_by_strength() {
        let board = Board::initial();
        for (strength, difficulty, error) in [
            (1, Difficulty::Easy, 0.20),
            (4, Difficulty::Easy, 0.20),
            (5, Difficulty::Medium, 0.05),
            (7, Difficulty::Medium, 0.05),
            (8, Difficulty::Hard, 0.01),
            (10, Difficulty::Hard, 0.01),
        ] {
            let params = get_ai_params(&board, Difficulty::Medium, Some(&league(strength)));
            assert_eq!(params.difficulty, difficulty, "strength {}", strength);
            assert_eq!(params.error_probability, error, "strength {}", strength);
        }
    }

    #[test]
    fn test_knockout_keeps_base_tier() {
        let ctx = MatchContext {
            opponent_strength: 10,
            format: TournamentFormat::Knockout,
        };
        let params = get_ai_params(&Board::initial(), Difficulty::Easy, Some(&ctx));
        assert_eq!(params, AiParams::new(Difficulty::Easy));

        let params = get_ai_params(&Board::initial(), Difficulty::Medium, None);
        assert_eq!(params, AiParams::new(Difficulty::Medium));
    }

    #[test]
    fn test_mercy_mode_when_engine_far_ahead() {
        let board = without_chariots(Color::Red);
        let advantage = evaluate(&board, ENGINE_COLOR);
        assert!(advantage > FAIRNESS_THRESHOLD, "advantage {}", advantage);
        assert_eq!(advantage, -evaluate_board(&board));

        let params = get_ai_params(&board, Difficulty::Medium, Some(&league(2)));
        assert!(params.randomness >= MERCY_RANDOMNESS);
        assert_eq!(params.depth_adjustment, 0);
        // League blunder rate survives mercy mode
        assert_eq!(params.error_probability, 0.20);
    }

    #[test]
    fn test_try_hard_when_engine_far_behind() {
        let board = without_chariots(Color::Black);
        assert!(evaluate(&board, ENGINE_COLOR) < -FAIRNESS_THRESHOLD);

        let params = get_ai_params(&board, Difficulty::Medium, Some(&league(2)));
        assert_eq!(params.difficulty, Difficulty::Easy);
        assert_eq!(params.depth_adjustment, 1);
        assert_eq!(params.randomness, 0.0);
        assert_eq!(params.error_probability, 0.0);
    }

    #[test]
    fn test_balanced_board_leaves_params_alone() {
        let params = get_ai_params(&Board::initial(), Difficulty::Hard, None);
        assert_eq!(params.randomness, 0.0);
        assert_eq!(params.depth_adjustment, 0);
    }

    #[test]
    fn test_engine_request_table() {
        for (difficulty, depth, time) in [
            (Difficulty::Easy, 2, 500),
            (Difficulty::Medium, 4, 1500),
            (Difficulty::Hard, 6, 3000),
        ] {
            let request = adjust_engine_request(&AiParams::new(difficulty));
            assert_eq!(request, EngineRequest { depth, time_limit_ms: time });
        }
    }

    #[test]
    fn test_engine_request_adjusts_and_clamps() {
        let mut params = AiParams::new(Difficulty::Hard);
        params.depth_adjustment = 1;
        assert_eq!(adjust_engine_request(&params).depth, 7);

        let mut params = AiParams::new(Difficulty::Easy);
        params.depth_adjustment = -1;
        assert_eq!(adjust_engine_request(&params).depth, MIN_DEPTH);

        let mut params = AiParams::new(Difficulty::Hard);
        params.depth_adjustment = 5;
        assert_eq!(adjust_engine_request(&params).depth, MAX_DEPTH);
    }
}
