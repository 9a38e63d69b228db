#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable search settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Fixed search depth in plies
    pub depth: u32,
    /// Seed for shuffling root moves before ordering; `None` keeps
    /// generation order
    pub shuffle_seed: Option<u64>,
    pub promotion_bonus: i32,
    pub check_bonus: i32,
    pub castle_bonus: i32,
    /// Subtracted from pawn moves that neither capture nor promote
    pub pawn_push_penalty: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 3,
            shuffle_seed: Some(11),
            promotion_bonus: 800,
            check_bonus: 50,
            castle_bonus: 30,
            pawn_push_penalty: 10,
        }
    }
}

impl SearchParams {
    /// Default settings at another depth
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..SearchParams::default()
        }
    }
}
