//! Static evaluation: material plus piece-square bonuses, memoized by
//! position hash.

use std::collections::HashMap;

use super::pst::piece_square_value;
use super::{Color, Position};

/// Magnitude of a checkmate score. Larger than any material total.
pub const MATE_SCORE: i32 = 100_000;

/// Score of any drawn position
pub const DRAW_SCORE: i32 = 0;

/// Memo of computed static scores keyed by position hash.
///
/// Only non-terminal positions are stored, so an entry never depends on
/// the terminal flags of the position it was computed for.
#[derive(Clone, Debug, Default)]
pub struct EvalCache {
    entries: HashMap<u64, i32>,
}

impl EvalCache {
    #[must_use]
    pub fn new() -> Self {
        EvalCache::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        EvalCache {
            entries: HashMap::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn get(&self, hash: u64) -> Option<i32> {
        self.entries.get(&hash).copied()
    }

    pub fn insert(&mut self, hash: u64, score: i32) {
        self.entries.insert(hash, score);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Material and placement balance with no terminal handling, positive for
/// white.
#[must_use]
pub fn material_balance(position: &Position) -> i32 {
    position
        .board()
        .pieces()
        .map(|(sq, color, piece)| color.sign() * piece_square_value(color, piece, sq))
        .sum()
}

/// Static evaluator with a memo of previously scored positions.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    cache: EvalCache,
    evaluations: u64,
    cache_hits: u64,
}

impl Evaluator {
    #[must_use]
    pub fn new() -> Self {
        Evaluator::default()
    }

    /// Evaluator that starts from an existing memo
    #[must_use]
    pub fn with_cache(cache: EvalCache) -> Self {
        Evaluator {
            cache,
            ..Evaluator::default()
        }
    }

    /// Score `position` from white's point of view.
    ///
    /// A mated side to move scores `-MATE_SCORE` for white and `MATE_SCORE`
    /// for black. Stalemate, insufficient material and threefold repetition
    /// score zero. Terminal flags are read as the position reports them, so
    /// `get_legal_moves` should have been called since the last change.
    pub fn score(&mut self, position: &Position) -> i32 {
        self.evaluations += 1;

        let flags = position.flags();
        if flags.checkmate {
            return match position.side_to_move() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        if flags.is_draw() {
            return DRAW_SCORE;
        }

        let hash = position.hash();
        if let Some(score) = self.cache.get(hash) {
            self.cache_hits += 1;
            return score;
        }
        let score = material_balance(position);
        self.cache.insert(hash, score);
        score
    }

    /// Number of `score` calls so far
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Number of `score` calls answered from the memo
    #[must_use]
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    pub fn reset_counters(&mut self) {
        self.evaluations = 0;
        self.cache_hits = 0;
    }

    #[must_use]
    pub fn cache(&self) -> &EvalCache {
        &self.cache
    }

    /// Give the memo back, e.g. to store it for the next search
    #[must_use]
    pub fn into_cache(self) -> EvalCache {
        self.cache
    }
}
