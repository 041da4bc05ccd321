use serde::{Deserialize, Serialize};

use super::difficulty::EngineRequest;

/// Default number of nodes between deadline checks
pub const CHECK_INTERVAL: u64 = 2048;

/// Knobs for a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Deepest iteration to attempt
    pub max_depth: u8,
    /// Wall-clock budget shared by all iterations, `None` for unbounded
    pub time_limit_ms: Option<u64>,
    /// Nodes visited between deadline checks
    pub check_interval: u64,
    /// Split the root moves across the rayon pool
    pub parallel_root: bool,
    /// Search every root move with a full window so the ranked scores are exact
    pub rank_root_moves: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            time_limit_ms: Some(1500),
            check_interval: CHECK_INTERVAL,
            parallel_root: false,
            rank_root_moves: false,
        }
    }
}

impl From<EngineRequest> for SearchConfig {
    fn from(request: EngineRequest) -> Self {
        Self {
            max_depth: request.depth,
            time_limit_ms: Some(request.time_limit_ms),
            ..Self::default()
        }
    }
}
