//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let mut position = Position::new();
//! let moves = position.get_legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

pub use super::{
    choose_move, CastleSide, Color, FenError, Move, MoveError, MoveList, Piece, Position,
    PositionBuilder, Search, SearchParams, Square, SquareError, TerminalFlags,
};
