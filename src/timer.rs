//! Deterministic timer queue on a virtual millisecond clock.
//!
//! The carousel never sleeps: whoever drives it advances the clock, and timers
//! that come due are handed back in deadline order (ties in scheduling order).

use std::collections::BTreeMap;

use crate::constants::Millis;

/// Handle of a scheduled timer, valid until it fires or is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId {
    due: Millis,
    seq: u64,
}

impl TimerId {
    pub fn due(self) -> Millis {
        self.due
    }
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Millis,
    next_seq: u64,
    pending: BTreeMap<TimerId, T>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self { now: 0, next_seq: 0, pending: BTreeMap::new() }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `payload` to fire `delay` ms from now.
    pub fn schedule(&mut self, delay: Millis, payload: T) -> TimerId {
        let id = TimerId { due: self.now.saturating_add(delay), seq: self.next_seq };
        self.next_seq += 1;
        self.pending.insert(id, payload);
        id
    }

    /// Cancel a pending timer. Cancelling a fired or unknown timer does nothing.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.pending.remove(&id)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.pending.keys().next().map(|id| id.due)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Millis) -> Option<(TimerId, T)> {
        let first = self.pending.first_key_value().map(|(id, _)| *id)?;
        if first.due > until {
            return None;
        }
        self.now = self.now.max(first.due);
        self.pending.remove_entry(&first)
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn advance_to(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }
}
