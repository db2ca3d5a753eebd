// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-cadence refresh scheduling.
//!
//! Scroll containers can report many offset changes per frame during a
//! fling. Those only set a flag; the window is recomputed on the next tick of
//! a fixed cadence, so the cost of a fling is bounded by the tick rate rather
//! than the event rate.
//!
//! The scheduler owns no timer. The host drives it by calling
//! [`RefreshScheduler::poll`] with a monotonic millisecond timestamp from its
//! event loop, as often as it likes.

/// Default tick interval: 10 Hz.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 100;

bitflags::bitflags! {
    /// Pending refresh work.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RefreshFlags: u8 {
        /// The scroll offset or data changed since the last refresh.
        const DIRTY  = 0b0000_0001;
        /// The next refresh must rebind every slot.
        const FORCED = 0b0000_0010;
    }
}

/// Observable scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Not ticking; no dataset is loaded or the list was disposed.
    Stopped,
    /// Ticking with nothing to do.
    Idle,
    /// Ticking with a refresh pending for the next due tick.
    Dirty,
}

/// A refresh that is due now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh {
    /// Rebind every slot regardless of position changes.
    pub forced: bool,
}

/// Fixed-cadence tick source with dirty/forced flags.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    interval_ms: u64,
    next_tick: Option<u64>,
    flags: RefreshFlags,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL_MS)
    }
}

impl RefreshScheduler {
    /// Creates a stopped scheduler ticking every `interval_ms` once started.
    ///
    /// An interval of zero is treated as one millisecond.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_tick: None,
            flags: RefreshFlags::empty(),
        }
    }

    /// Returns the tick interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Starts ticking; the first tick is due one interval after `now`.
    ///
    /// Restarting replaces any pending deadline.
    pub fn start(&mut self, now: u64) {
        self.next_tick = Some(now.saturating_add(self.interval_ms));
    }

    /// Stops ticking. Pending flags are kept.
    pub fn cancel(&mut self) {
        self.next_tick = None;
    }

    /// Returns `true` while the scheduler is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Timestamp of the next tick, if running.
    #[must_use]
    pub const fn next_tick(&self) -> Option<u64> {
        self.next_tick
    }

    /// Requests a refresh on the next tick.
    pub fn mark_dirty(&mut self) {
        self.flags |= RefreshFlags::DIRTY;
    }

    /// Requests a full rebind on the next tick.
    pub fn force(&mut self) {
        self.flags |= RefreshFlags::DIRTY | RefreshFlags::FORCED;
    }

    /// Returns the pending flags.
    #[must_use]
    pub const fn flags(&self) -> RefreshFlags {
        self.flags
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SchedulerState {
        if !self.is_running() {
            SchedulerState::Stopped
        } else if self.flags.contains(RefreshFlags::DIRTY) {
            SchedulerState::Dirty
        } else {
            SchedulerState::Idle
        }
    }

    /// Advances the clock to `now` and reports a refresh if one is due.
    ///
    /// At most one refresh is reported per call, however many ticks elapsed
    /// since the last poll; the next deadline is the first cadence point after
    /// `now`. Call [`complete`](Self::complete) once the refresh was applied.
    pub fn poll(&mut self, now: u64) -> Option<Refresh> {
        let due = self.next_tick?;
        if now < due {
            return None;
        }
        let missed = (now - due) / self.interval_ms;
        let step = self.interval_ms.saturating_mul(missed.saturating_add(1));
        self.next_tick = Some(due.saturating_add(step));

        if !self.flags.contains(RefreshFlags::DIRTY) {
            return None;
        }
        Some(Refresh {
            forced: self.flags.contains(RefreshFlags::FORCED),
        })
    }

    /// Clears pending work after a refresh was applied.
    pub fn complete(&mut self) {
        self.flags = RefreshFlags::empty();
    }
}
