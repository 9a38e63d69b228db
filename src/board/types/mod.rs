//! Core chess types.
//!
//! This module contains the value types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` and `MoveList` - self-classifying move values
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleOptions, CastleSide, CastlingRights};
pub(crate) use moves::ScoredMoveList;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
