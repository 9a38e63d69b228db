//! Chess position representation and game logic.
//!
//! An 8x8 grid of optional pieces with full move rules: castling, en
//! passant and promotion (always to a queen). `Position` adds the game
//! state needed to generate legal moves, detect the end of the game and
//! take moves back.
//!
//! # Example
//! ```
//! use chess_core::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.get_legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod draw;
mod error;
pub mod eval;
mod fen;
mod grid;
mod history;
mod make_unmake;
mod movegen;
pub mod prelude;
mod pst;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use grid::Board;
pub use state::{Position, TerminalFlags};
pub use types::{
    CastleOptions, CastleSide, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece,
    Square,
};

// Evaluation and search
pub use eval::{EvalCache, Evaluator, MATE_SCORE};
pub use pst::{piece_square_value, positional_bonus};
pub use search::{
    choose_move, random_move, LogSearchLogger, Search, SearchInfo, SearchLogger, SearchParams,
    SearchResult, SearchStats, SilentLogger,
};

pub(crate) use types::ScoredMoveList;
