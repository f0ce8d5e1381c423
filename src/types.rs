//! Per-number speaking history.
//!
//! A [`NumberRecord`] remembers the two most recent turn indices at which one
//! distinct number was spoken. The dense table in
//! [`crate::history::NumberHistory`] holds one record per slot for up to tens
//! of millions of slots, so the representation matters: turns are stored as
//! `Option<NonZeroU32>` holding `turn + 1`, which packs each optional turn
//! into 4 bytes (niche optimization) and the whole record into 8.

use std::num::NonZeroU32;

/// Speaking history of one distinct number.
///
/// Invariant: whenever both turns are present, `previous_turn < last_turn`.
/// [`record_turn`](NumberRecord::record_turn) maintains this as long as turn
/// indices are fed in increasing order, which the engine guarantees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberRecord {
    /// Most recent turn the number was spoken, stored as `turn + 1`.
    last: Option<NonZeroU32>,
    /// Turn before that, stored as `turn + 1`.
    previous: Option<NonZeroU32>,
}

/// A record for a number that has never been spoken.
pub const EMPTY_RECORD: NumberRecord = NumberRecord {
    last: None,
    previous: None,
};

impl NumberRecord {
    /// Most recent turn index this number was spoken, if ever.
    #[inline(always)]
    pub fn last_turn(&self) -> Option<u32> {
        self.last.map(|t| t.get() - 1)
    }

    /// Turn index immediately prior to [`last_turn`](Self::last_turn), if the
    /// number has been spoken at least twice.
    #[inline(always)]
    pub fn previous_turn(&self) -> Option<u32> {
        self.previous.map(|t| t.get() - 1)
    }

    /// Shift `last_turn` into `previous_turn` and set `last_turn = turn`.
    ///
    /// Must be called with strictly increasing turn indices.
    #[inline(always)]
    pub fn record_turn(&mut self, turn: u32) {
        debug_assert!(
            self.last.map_or(true, |l| turn + 1 > l.get()),
            "turn {} not after last_turn {:?}",
            turn,
            self.last_turn()
        );
        self.previous = self.last;
        // turn + 1 is non-zero for every reachable turn index.
        self.last = NonZeroU32::new(turn + 1);
    }

    /// Gap between the two most recent speakings, if there have been two.
    ///
    /// Strictly positive when present.
    #[inline(always)]
    pub fn gap(&self) -> Option<u32> {
        match (self.last, self.previous) {
            (Some(l), Some(p)) => {
                debug_assert!(
                    l > p,
                    "last_turn {} <= previous_turn {}",
                    l.get() - 1,
                    p.get() - 1
                );
                Some(l.get() - p.get())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_no_turns() {
        let r = EMPTY_RECORD;
        assert_eq!(r.last_turn(), None);
        assert_eq!(r.previous_turn(), None);
        assert_eq!(r.gap(), None);
    }

    #[test]
    fn first_record_sets_last_only() {
        let mut r = NumberRecord::default();
        r.record_turn(0);
        assert_eq!(r.last_turn(), Some(0));
        assert_eq!(r.previous_turn(), None);
        assert_eq!(r.gap(), None);
    }

    #[test]
    fn second_record_shifts_history() {
        let mut r = NumberRecord::default();
        r.record_turn(3);
        r.record_turn(7);
        assert_eq!(r.last_turn(), Some(7));
        assert_eq!(r.previous_turn(), Some(3));
        assert_eq!(r.gap(), Some(4));
    }

    #[test]
    fn third_record_forgets_oldest() {
        let mut r = NumberRecord::default();
        r.record_turn(1);
        r.record_turn(2);
        r.record_turn(10);
        assert_eq!(r.last_turn(), Some(10));
        assert_eq!(r.previous_turn(), Some(2));
        assert_eq!(r.gap(), Some(8));
    }

    #[test]
    fn record_is_8_bytes() {
        assert_eq!(std::mem::size_of::<NumberRecord>(), 8);
    }

    #[test]
    fn turn_zero_roundtrips() {
        // Turn index 0 must be distinguishable from "never spoken".
        let mut r = NumberRecord::default();
        r.record_turn(0);
        r.record_turn(1);
        assert_eq!(r.previous_turn(), Some(0));
        assert_eq!(r.gap(), Some(1));
    }
}
