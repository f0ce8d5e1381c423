//! Hybrid dense + sparse storage for number records.
//!
//! Maps a spoken number to its [`NumberRecord`]. Numbers below the dense
//! size index straight into a preallocated table; anything else falls back
//! to a `HashMap`. Spoken values are turn gaps and therefore strictly below
//! the turn count, so with the table sized to the target turn count the map
//! only ever sees seed values outside that range.

use std::collections::HashMap;

use crate::types::{NumberRecord, EMPTY_RECORD};

/// Per-number record store with O(1) unhashed access for the common range.
pub struct NumberHistory {
    /// Preallocated table for numbers in `0..dense.len()`. Allocated once at
    /// construction, never resized.
    dense: Vec<NumberRecord>,
    /// Fallback for numbers at or above the dense size.
    sparse: HashMap<u32, NumberRecord>,
}

impl NumberHistory {
    /// Allocate a history with a dense table of `dense_size` slots.
    pub fn new(dense_size: usize) -> Self {
        Self {
            dense: vec![NumberRecord::default(); dense_size],
            sparse: HashMap::new(),
        }
    }

    /// Record for `number`, created empty on first access.
    #[inline(always)]
    pub fn get_or_create(&mut self, number: u32) -> &mut NumberRecord {
        if (number as usize) < self.dense.len() {
            &mut self.dense[number as usize]
        } else {
            self.sparse.entry(number).or_default()
        }
    }

    /// Mark `number` as spoken on `turn`.
    #[inline(always)]
    pub fn record_turn(&mut self, number: u32, turn: u32) {
        self.get_or_create(number).record_turn(turn);
    }

    /// Copy of the record for `number` (empty if never spoken).
    pub fn get(&self, number: u32) -> NumberRecord {
        if (number as usize) < self.dense.len() {
            self.dense[number as usize]
        } else {
            self.sparse.get(&number).copied().unwrap_or(EMPTY_RECORD)
        }
    }

    /// Size of the preallocated dense table.
    pub fn dense_size(&self) -> usize {
        self.dense.len()
    }

    /// Number of entries that overflowed into the sparse map.
    pub fn sparse_len(&self) -> usize {
        self.sparse.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_and_sparse_routing() {
        let mut h = NumberHistory::new(10);
        h.record_turn(3, 0); // dense
        h.record_turn(10, 1); // boundary: first sparse value
        h.record_turn(1_000_000, 2); // sparse

        assert_eq!(h.get(3).last_turn(), Some(0));
        assert_eq!(h.get(10).last_turn(), Some(1));
        assert_eq!(h.get(1_000_000).last_turn(), Some(2));
        assert_eq!(h.sparse_len(), 2);
    }

    #[test]
    fn unseen_numbers_are_empty() {
        let h = NumberHistory::new(10);
        assert_eq!(h.get(5), EMPTY_RECORD);
        assert_eq!(h.get(99), EMPTY_RECORD);
        assert_eq!(h.sparse_len(), 0);
    }

    #[test]
    fn get_or_create_does_not_lose_history() {
        let mut h = NumberHistory::new(4);
        h.record_turn(2, 0);
        h.record_turn(2, 5);
        let r = h.get(2);
        assert_eq!(r.previous_turn(), Some(0));
        assert_eq!(r.last_turn(), Some(5));
        assert_eq!(r.gap(), Some(5));
    }

    #[test]
    fn zero_dense_size_is_all_sparse() {
        let mut h = NumberHistory::new(0);
        h.record_turn(0, 0);
        h.record_turn(7, 1);
        assert_eq!(h.get(0).last_turn(), Some(0));
        assert_eq!(h.get(7).last_turn(), Some(1));
        assert_eq!(h.sparse_len(), 2);
    }
}
