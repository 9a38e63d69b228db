//! Search bounds.

use crate::board::eval::MATE_SCORE;

/// Bound wider than any reachable score
pub const INFINITY: i32 = MATE_SCORE + 1_000;

/// Scores at least this large are mates
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;
