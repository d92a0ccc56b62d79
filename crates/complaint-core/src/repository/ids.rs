//! Numeric sources for complaint ids.

use std::cell::Cell;

/// Yields numbers used as the suffix of a new id
pub trait IdSource {
    /// A number in `0..bound`
    fn next(&self, bound: u32) -> u32;
}

/// Deterministic counter, wraps at `bound`
#[derive(Debug, Default)]
pub struct SequenceIds {
    next: Cell<u32>,
}

impl SequenceIds {
    pub fn starting_at(n: u32) -> Self {
        Self { next: Cell::new(n) }
    }
}

impl IdSource for SequenceIds {
    fn next(&self, bound: u32) -> u32 {
        let n = self.next.get();
        self.next.set(n.wrapping_add(1));
        n % bound.max(1)
    }
}
