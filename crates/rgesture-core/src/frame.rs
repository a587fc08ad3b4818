#![forbid(unsafe_code)]

//! Frame-callback scheduling.
//!
//! Controllers never block. Work that must happen later (a long-press
//! timeout, the next auto-scroll tick, a delayed commit) is posted to a
//! [`FrameQueue`] keyed by a small task enum, and the host pumps the owner on
//! every frame. The queue mirrors the usual toolkit primitives:
//!
//! - [`post`](FrameQueue::post): run on the next frame.
//! - [`post_delayed`](FrameQueue::post_delayed): run on the first frame at or
//!   after a deadline.
//! - [`cancel`](FrameQueue::cancel): forget a pending task.
//!
//! # Invariants
//!
//! 1. A key is pending at most once; posting it again replaces its deadline.
//! 2. [`take_due`](FrameQueue::take_due) returns tasks ordered by deadline,
//!    ties broken by posting order.
//! 3. A task posted while draining runs no earlier than the next call to
//!    `take_due`.

use std::time::Duration;

use web_time::Instant;

#[derive(Debug, Clone)]
struct Pending<K> {
    key: K,
    due: Instant,
    seq: u64,
}

/// Deadline-ordered set of keyed callbacks.
#[derive(Debug, Clone)]
pub struct FrameQueue<K> {
    pending: Vec<Pending<K>>,
    seq: u64,
}

impl<K> Default for FrameQueue<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            seq: 0,
        }
    }
}

impl<K: Copy + PartialEq> FrameQueue<K> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `key` on the next frame.
    pub fn post(&mut self, key: K, now: Instant) {
        self.post_at(key, now);
    }

    /// Run `key` on the first frame at or after `now + delay`.
    pub fn post_delayed(&mut self, key: K, now: Instant, delay: Duration) {
        self.post_at(key, now + delay);
    }

    /// Forget `key`. Returns whether it was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.key != key);
        self.pending.len() != before
    }

    /// Whether `key` is waiting to run.
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.pending.iter().any(|p| p.key == key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest deadline, if any task is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return every task whose deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Vec<K> {
        let mut due: Vec<Pending<K>> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|p| p.key).collect()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    fn post_at(&mut self, key: K, due: Instant) {
        self.seq += 1;
        let seq = self.seq;
        if let Some(existing) = self.pending.iter_mut().find(|p| p.key == key) {
            existing.due = due;
            existing.seq = seq;
        } else {
            self.pending.push(Pending { key, due, seq });
        }
    }
}
