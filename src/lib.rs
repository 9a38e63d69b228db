//! Chess position engine with a fixed-depth negamax search.
//!
//! [`board`] holds the rules: positions, legal move generation, make and
//! undo, check and draw detection, evaluation and search. [`engine`] runs
//! searches on a background thread for interactive callers.

pub mod board;
pub mod engine;
pub mod sync;
mod zobrist;

pub use board::{choose_move, Color, Move, MoveList, Piece, Position, Search, Square};
pub use engine::GameSession;
