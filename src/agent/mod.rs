pub mod ai;
pub mod worker;

pub use ai::{Difficulty, NegamaxEngine, SearchResult};
pub use worker::{EngineWorker, MoveRequest, WorkerError};
