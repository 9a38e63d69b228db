//! Background search on a private copy of the position.

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;
use parking_lot::Mutex;

use crate::board::{random_move, EvalCache, Move, Position, Search, SearchParams, SearchStats};
use crate::sync::StopFlag;

/// Search thread stack size (32 MB)
pub const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Settings for background searches.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerConfig {
    pub params: SearchParams,
    pub stack_size: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        WorkerConfig {
            params: SearchParams::default(),
            stack_size: SEARCH_STACK_SIZE,
        }
    }
}

/// What a finished worker sends back.
#[derive(Clone, Copy, Debug)]
pub struct EngineReply {
    /// Chosen move, `None` only if the position had no legal moves
    pub best_move: Option<Move>,
    /// Root score from the mover's point of view
    pub score: i32,
    pub stats: SearchStats,
}

/// One search running on its own thread.
///
/// The result arrives over a one-shot channel. Cancelling raises the stop
/// flag and discards whatever the search would have produced.
pub struct SearchWorker {
    stop: StopFlag,
    receiver: Receiver<EngineReply>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Start searching `position` (which the worker owns from now on).
    ///
    /// The evaluation memo stays locked for the whole search, so searches
    /// sharing `cache` run one after another.
    pub fn spawn(
        mut position: Position,
        config: &WorkerConfig,
        cache: Arc<Mutex<EvalCache>>,
    ) -> io::Result<Self> {
        let stop = StopFlag::new();
        let (sender, receiver) = mpsc::channel();
        let params = config.params.clone();
        let worker_stop = stop.clone();

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(config.stack_size)
            .spawn(move || {
                let mut guard = cache.lock();
                let mut search = Search::with_cache(params, std::mem::take(&mut *guard))
                    .with_stop_flag(worker_stop.clone());

                let legal_moves = position.get_legal_moves();
                let result = search.search(&mut position, &legal_moves);
                let best_move = match result.best_move {
                    Some(mv) => Some(mv),
                    None if worker_stop.is_stopped() => None,
                    None => random_move(&legal_moves, &mut rand::thread_rng()),
                };
                *guard = search.into_cache();
                drop(guard);

                if worker_stop.is_stopped() {
                    debug!("search cancelled, result discarded");
                    return;
                }
                // The receiver may already be gone; nothing to do then.
                let _ = sender.send(EngineReply {
                    best_move,
                    score: result.score,
                    stats: result.stats,
                });
            })?;

        Ok(SearchWorker {
            stop,
            receiver,
            handle: Some(handle),
        })
    }

    /// The reply, if the search has finished. Never blocks.
    pub fn try_result(&mut self) -> Option<EngineReply> {
        match self.receiver.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Whether the search thread has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Block until the search finishes.
    pub fn wait(mut self) -> Option<EngineReply> {
        let reply = self.receiver.recv().ok();
        self.join();
        reply
    }

    /// Abort the search and throw its result away.
    pub fn cancel(mut self) {
        self.stop.stop();
        self.join();
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("search thread panicked");
            }
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.stop.stop();
        self.join();
    }
}
