//! Running the engine alongside an interactive caller.
//!
//! `SearchWorker` runs one search on its own thread; `GameSession` keeps a
//! game's position and legal moves current and hands searches to workers.

mod session;
mod worker;

pub use session::GameSession;
pub use worker::{EngineReply, SearchWorker, WorkerConfig, SEARCH_STACK_SIZE};
