// SPDX-License-Identifier: MPL-2.0
//! Deadline queue for the toaster's deferred callbacks.
//!
//! Every pending callback is identified by a [`TimerHandle`]. Handles are
//! cancellation tokens: the toast that scheduled a callback keeps the handle
//! and cancels it before scheduling a replacement.

use super::id::ToastId;
use std::collections::BTreeMap;
use std::time::Instant;

/// Token for a scheduled callback. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Work deferred to a later point of the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// The toast has been laid out and can be measured.
    Mount(ToastId),
    /// The toast's lifetime elapsed.
    AutoRemove(ToastId),
    /// The removal transition finished; detach the toast.
    Unmount(ToastId),
}

/// Pending callbacks keyed by handle.
#[derive(Debug, Default)]
pub struct Timers {
    next_handle: u64,
    pending: BTreeMap<TimerHandle, (Instant, TimerEvent)>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire once `deadline` is reached.
    pub fn schedule(&mut self, deadline: Instant, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.insert(handle, (deadline, event));
        handle
    }

    /// Cancels a pending callback. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    /// Removes and returns the earliest callback due at `now`.
    ///
    /// Ties on the deadline are broken by scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerHandle, Instant, TimerEvent)> {
        let (&handle, _) = self
            .pending
            .iter()
            .filter(|(_, (deadline, _))| *deadline <= now)
            .min_by_key(|(handle, (deadline, _))| (*deadline, **handle))?;
        self.pending
            .remove(&handle)
            .map(|(deadline, event)| (handle, deadline, event))
    }

    /// Returns the deadline of the next pending callback.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|(deadline, _)| *deadline).min()
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
