//! Delayed callbacks with cancel handles.
//!
//! The controller never sleeps. It asks a `Scheduler` to deliver a
//! `TimerId` after a delay and the host hands that id back through
//! `GameController::on_timer`. The controller keeps at most one id armed
//! and cancels it before arming another, so a stale delivery is recognised
//! and dropped.
//!
//! `VirtualScheduler` is a manual clock for tests and headless play:
//! nothing fires until `advance` moves time forward.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Handle for one scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Source of delayed callbacks.
///
/// ## Implementation Notes
///
/// - `schedule` must return a fresh id every call, or an error when the
///   callback could not be armed (nothing will be delivered for it)
/// - `cancel` on an unknown or already delivered id is a no-op
/// - delivery happens on the controller's thread, never re-entrantly
pub trait Scheduler {
    /// Arrange for `id` to be delivered after `delay_ms`.
    fn schedule(&mut self, delay_ms: u64) -> Result<TimerId>;

    /// Drop a pending callback.
    fn cancel(&mut self, id: TimerId);

    /// Called after the controller has handled a delivered id.
    ///
    /// Lets schedulers release bookkeeping for fired timers.
    fn complete(&mut self, _id: TimerId) {}
}

/// Manual clock. Time only moves when `advance` is called.
///
/// ```
/// use memory_match::timer::{Scheduler, VirtualScheduler};
///
/// let mut clock = VirtualScheduler::new();
/// let id = clock.schedule(1000).unwrap();
///
/// assert!(clock.advance(999).is_empty());
/// assert_eq!(clock.advance(1), vec![id]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VirtualScheduler {
    now_ms: u64,
    next_id: u64,
    /// Pending timers keyed by (due time, id) so delivery order is stable.
    queue: BTreeSet<(u64, TimerId)>,
}

impl VirtualScheduler {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether a timer is still waiting.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.iter().any(|(_, queued)| *queued == id)
    }

    /// Move time forward and return the timers that came due, oldest first.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<TimerId> {
        self.now_ms = self.now_ms.saturating_add(delta_ms);

        let later = self.queue.split_off(&(self.now_ms.saturating_add(1), TimerId(0)));
        let due = std::mem::replace(&mut self.queue, later);

        due.into_iter().map(|(_, id)| id).collect()
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay_ms: u64) -> Result<TimerId> {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now_ms.saturating_add(delay_ms);
        self.queue.insert((due, id));
        tracing::trace!(timer = %id, due_ms = due, "timer scheduled");
        Ok(id)
    }

    fn cancel(&mut self, id: TimerId) {
        self.queue.retain(|(_, queued)| *queued != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids() {
        let mut clock = VirtualScheduler::new();
        let a = clock.schedule(10).unwrap();
        let b = clock.schedule(10).unwrap();
        assert_ne!(a, b);
        assert_eq!(clock.pending(), 2);
    }

    #[test]
    fn test_advance_delivers_in_due_order() {
        let mut clock = VirtualScheduler::new();
        let slow = clock.schedule(300).unwrap();
        let fast = clock.schedule(100).unwrap();

        assert_eq!(clock.advance(500), vec![fast, slow]);
        assert_eq!(clock.now_ms(), 500);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_cancel() {
        let mut clock = VirtualScheduler::new();
        let id = clock.schedule(100).unwrap();
        assert!(clock.is_pending(id));

        clock.cancel(id);
        assert!(!clock.is_pending(id));
        assert!(clock.advance(1000).is_empty());

        // Cancelling again is harmless
        clock.cancel(id);
    }

    #[test]
    fn test_exact_due_time_fires() {
        let mut clock = VirtualScheduler::new();
        let id = clock.schedule(1000).unwrap();
        assert!(clock.advance(999).is_empty());
        assert_eq!(clock.advance(1), vec![id]);
    }
}
