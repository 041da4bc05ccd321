// Background engine worker
//
// The search blocks for up to several seconds, so interactive callers hand
// it to a dedicated thread. Requests and responses travel over two mpsc
// channels and are matched by order; only one request may be in flight.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use log::{error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::ai::{Difficulty, NegamaxEngine};
use crate::game_repr::{Board, Color, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error("engine thread has shut down")]
    Disconnected,
    #[error("no request is waiting for a response")]
    NoPendingRequest,
    #[error("a request is already in flight")]
    RequestPending,
}

/// One search job. The board is moved in, so nothing else can touch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: Board,
    pub color: Color,
    pub difficulty: Difficulty,
}

pub struct EngineWorker {
    request_tx: Option<Sender<MoveRequest>>,
    response_rx: Receiver<Option<Move>>,
    handle: Option<JoinHandle<()>>,
    pending: bool,
}

impl EngineWorker {
    pub fn spawn() -> Self {
        Self::with_engine(NegamaxEngine::new("AI (worker)".to_string()))
    }

    pub fn with_engine(engine: NegamaxEngine) -> Self {
        let (request_tx, request_rx) = channel::<MoveRequest>();
        let (response_tx, response_rx) = channel::<Option<Move>>();

        let handle = thread::spawn(move || run(engine, request_rx, response_tx));

        Self {
            request_tx: Some(request_tx),
            response_rx,
            handle: Some(handle),
            pending: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending
    }

    /// Queue a search. Fails if the previous answer hasn't been collected.
    pub fn submit(&mut self, request: MoveRequest) -> Result<(), WorkerError> {
        if self.pending {
            return Err(WorkerError::RequestPending);
        }
        let tx = self.request_tx.as_ref().ok_or(WorkerError::Disconnected)?;
        tx.send(request).map_err(|_| WorkerError::Disconnected)?;
        self.pending = true;
        Ok(())
    }

    /// Non-blocking poll. `Ok(None)` means the search is still running.
    pub fn try_recv(&mut self) -> Result<Option<Option<Move>>, WorkerError> {
        if !self.pending {
            return Err(WorkerError::NoPendingRequest);
        }
        match self.response_rx.try_recv() {
            Ok(mv) => {
                self.pending = false;
                Ok(Some(mv))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.pending = false;
                Err(WorkerError::Disconnected)
            }
        }
    }

    /// Block until the in-flight search answers.
    pub fn recv(&mut self) -> Result<Option<Move>, WorkerError> {
        if !self.pending {
            return Err(WorkerError::NoPendingRequest);
        }
        self.pending = false;
        self.response_rx.recv().map_err(|_| WorkerError::Disconnected)
    }

    /// Submit and wait in one go.
    pub fn get_best_move(&mut self, board: Board, color: Color, difficulty: Difficulty) -> Result<Option<Move>, WorkerError> {
        self.submit(MoveRequest {
            board,
            color,
            difficulty,
        })?;
        self.recv()
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the thread's loop
        self.request_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("engine worker thread panicked on shutdown");
            }
        }
    }
}

fn run(engine: NegamaxEngine, requests: Receiver<MoveRequest>, responses: Sender<Option<Move>>) {
    for request in requests {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            engine.get_best_move(&request.board, request.color, request.difficulty)
        }));
        let mv = outcome.unwrap_or_else(|_| {
            error!("[{}] search panicked, answering with no move", engine.name());
            None
        });
        if responses.send(mv).is_err() {
            warn!("[{}] response dropped, caller went away", engine.name());
            break;
        }
    }
}
