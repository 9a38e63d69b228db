use std::collections::HashMap;

/// Occurrence count per position hash for the current line of play.
///
/// Entries that fall to zero are removed, so two tables that describe the
/// same history compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    fn set(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.set(hash, next);
        next
    }

    pub(crate) fn decrement(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_sub(1);
        self.set(hash, next);
        next
    }

    /// Whether any recorded position has occurred at least `n` times
    pub(crate) fn any_at_least(&self, n: u32) -> bool {
        self.counts.values().any(|&count| count >= n)
    }
}
