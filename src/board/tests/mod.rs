//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation and perft counts
//! - `check.rs` - Attack and check detection
//! - `make_unmake.rs` - Make/undo correctness
//! - `castling.rs` - Castling preconditions
//! - `en_passant.rs` - En passant timing and capture
//! - `draw.rs` - Insufficient material and repetition
//! - `notation.rs` - Move notation and check flags
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Negamax search
//! - `proptest.rs` - Property-based tests

mod en_passant;
mod movegen;
mod search;

use crate::board::{Move, Position, Square};

/// Parse a square like `e4`
pub(super) fn sq(text: &str) -> Square {
    text.parse().expect("valid square")
}

/// The legal move between two squares
pub(super) fn find_move(position: &mut Position, from: &str, to: &str) -> Move {
    position
        .get_legal_moves()
        .find(sq(from), sq(to))
        .unwrap_or_else(|| panic!("expected legal move {from}{to}"))
}

/// Play a sequence of coordinate moves like `["e2e4", "e7e5"]`
pub(super) fn play(position: &mut Position, moves: &[&str]) {
    for text in moves {
        let mv = position
            .parse_move(text)
            .unwrap_or_else(|err| panic!("{text}: {err}"));
        position.make_move(&mv);
    }
}
