// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition on recycled slots.
//!
//! A press on a list item is ambiguous: it may be the start of a tap or the
//! start of a scroll drag. And because slots are recycled, the slot under the
//! pointer at release may show a different record than it did at press time.
//! [`TapState`] resolves both:
//!
//! 1. **No active press**: suppressed.
//! 2. **Different slot**: released over another slot, suppressed.
//! 3. **Recycled slot**: the slot was rebound to another index during the
//!    press, suppressed.
//! 4. **Dragged**: the pointer moved beyond `move_threshold` at any point
//!    during the press, suppressed.
//! 5. **Held too long**: more than `time_threshold` elapsed, suppressed.
//!
//! Otherwise the press produces a tap on the data index bound at press time.
//!
//! ```
//! use kurbo::Point;
//! use recycle_list::{TapResult, TapState};
//!
//! let mut taps = TapState::new();
//! taps.on_down(None, 2, 17, Point::new(10.0, 10.0), 1_000);
//! let result = taps.on_up(None, 2, Some(17), Point::new(11.0, 12.0), 1_080);
//! assert_eq!(result, TapResult::Tap(17));
//! ```
//!
//! Each pointer is tracked independently.

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;

use kurbo::Point;

/// Pointer identifier for tracking concurrent presses.
pub type PointerId = NonZeroU64;

const DEFAULT_POINTER: PointerId = PointerId::MIN;

/// Default movement tolerance, in content units, before a press becomes a drag.
pub const DEFAULT_TAP_MOVE_THRESHOLD: f64 = 5.0;

/// An active press on a slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Press {
    /// Physical slot that was pressed.
    pub slot: usize,
    /// Data index bound to the slot at press time.
    pub index: usize,
    /// Pointer position at press time.
    pub down_position: Point,
    /// Press timestamp in milliseconds.
    pub down_time: u64,
    /// True once the pointer moved beyond the movement threshold.
    pub moved_too_far: bool,
}

/// Outcome of a pointer release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// A tap on the given data index.
    Tap(usize),
    /// No tap; carries the pressed data index if a press was active.
    Suppressed(Option<usize>),
}

/// Per-pointer tap recognizer for list slots.
#[derive(Clone, Debug)]
pub struct TapState {
    presses: BTreeMap<PointerId, Press>,
    /// Movement allowed during a press, or `None` for unlimited.
    pub move_threshold: Option<f64>,
    /// Press duration allowed in milliseconds, or `None` for unlimited.
    pub time_threshold: Option<u64>,
}

impl Default for TapState {
    fn default() -> Self {
        Self::new()
    }
}

impl TapState {
    /// Creates a recognizer with [`DEFAULT_TAP_MOVE_THRESHOLD`] and no time limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_thresholds(Some(DEFAULT_TAP_MOVE_THRESHOLD), None)
    }

    /// Creates a recognizer with custom thresholds.
    #[must_use]
    pub fn with_thresholds(move_threshold: Option<f64>, time_threshold: Option<u64>) -> Self {
        Self {
            presses: BTreeMap::new(),
            move_threshold,
            time_threshold,
        }
    }

    /// Records a press on `slot`, which currently shows data `index`.
    ///
    /// A second press from the same pointer replaces the first.
    pub fn on_down(
        &mut self,
        pointer: Option<PointerId>,
        slot: usize,
        index: usize,
        position: Point,
        timestamp: u64,
    ) {
        let press = Press {
            slot,
            index,
            down_position: position,
            down_time: timestamp,
            moved_too_far: false,
        };
        self.presses
            .insert(pointer.unwrap_or(DEFAULT_POINTER), press);
    }

    /// Tracks pointer movement during a press.
    ///
    /// Returns `Some(index)` the first time the press turns into a drag.
    pub fn on_move(&mut self, pointer: Option<PointerId>, position: Point) -> Option<usize> {
        let press = self.presses.get_mut(&pointer.unwrap_or(DEFAULT_POINTER))?;
        if press.moved_too_far {
            return None;
        }
        let threshold = self.move_threshold?;
        if press.down_position.distance(position) > threshold {
            press.moved_too_far = true;
            return Some(press.index);
        }
        None
    }

    /// Resolves a release over `slot`, which now shows `current_index`.
    pub fn on_up(
        &mut self,
        pointer: Option<PointerId>,
        slot: usize,
        current_index: Option<usize>,
        position: Point,
        timestamp: u64,
    ) -> TapResult {
        let Some(press) = self.presses.remove(&pointer.unwrap_or(DEFAULT_POINTER)) else {
            return TapResult::Suppressed(None);
        };
        let suppressed = TapResult::Suppressed(Some(press.index));

        if press.slot != slot || current_index != Some(press.index) || press.moved_too_far {
            return suppressed;
        }

        let distance_ok = self
            .move_threshold
            .is_none_or(|threshold| press.down_position.distance(position) <= threshold);
        let time_ok = self
            .time_threshold
            .is_none_or(|threshold| timestamp.saturating_sub(press.down_time) <= threshold);

        if distance_ok && time_ok {
            TapResult::Tap(press.index)
        } else {
            suppressed
        }
    }

    /// Cancels the press of one pointer. Returns `true` if one was active.
    pub fn cancel(&mut self, pointer: Option<PointerId>) -> bool {
        self.presses
            .remove(&pointer.unwrap_or(DEFAULT_POINTER))
            .is_some()
    }

    /// Cancels every active press.
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    /// Returns `true` if `pointer` has an active press.
    #[must_use]
    pub fn is_pressed(&self, pointer: Option<PointerId>) -> bool {
        self.presses
            .contains_key(&pointer.unwrap_or(DEFAULT_POINTER))
    }

    /// Iterates over all active presses.
    pub fn presses(&self) -> impl Iterator<Item = &Press> {
        self.presses.values()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{PointerId, TapResult, TapState};

    #[test]
    fn release_on_same_slot_is_a_tap() {
        let mut taps = TapState::new();
        taps.on_down(None, 0, 4, Point::new(10.0, 10.0), 0);
        assert!(taps.is_pressed(None));
        assert_eq!(
            taps.on_up(None, 0, Some(4), Point::new(12.0, 11.0), 50),
            TapResult::Tap(4)
        );
        assert!(!taps.is_pressed(None));
    }

    #[test]
    fn release_without_press_is_suppressed() {
        let mut taps = TapState::new();
        assert_eq!(
            taps.on_up(None, 0, Some(4), Point::ZERO, 0),
            TapResult::Suppressed(None)
        );
    }

    #[test]
    fn drag_turns_a_press_into_a_scroll() {
        let mut taps = TapState::new();
        taps.on_down(None, 1, 8, Point::new(0.0, 0.0), 0);
        assert_eq!(taps.on_move(None, Point::new(0.0, 3.0)), None);
        assert_eq!(taps.on_move(None, Point::new(0.0, 30.0)), Some(8));
        // Reported once.
        assert_eq!(taps.on_move(None, Point::new(0.0, 40.0)), None);
        // Coming back does not undo the drag.
        assert_eq!(
            taps.on_up(None, 1, Some(8), Point::new(0.0, 0.0), 10),
            TapResult::Suppressed(Some(8))
        );
    }

    #[test]
    fn recycled_slot_suppresses_tap() {
        let mut taps = TapState::new();
        taps.on_down(None, 1, 8, Point::ZERO, 0);
        assert_eq!(
            taps.on_up(None, 1, Some(11), Point::ZERO, 10),
            TapResult::Suppressed(Some(8))
        );
    }

    #[test]
    fn different_slot_suppresses_tap() {
        let mut taps = TapState::new();
        taps.on_down(None, 1, 8, Point::ZERO, 0);
        assert_eq!(
            taps.on_up(None, 2, Some(9), Point::ZERO, 10),
            TapResult::Suppressed(Some(8))
        );
    }

    #[test]
    fn time_threshold_rejects_long_presses() {
        let mut taps = TapState::with_thresholds(None, Some(300));
        taps.on_down(None, 0, 0, Point::ZERO, 1_000);
        assert_eq!(
            taps.on_up(None, 0, Some(0), Point::new(100.0, 0.0), 1_301),
            TapResult::Suppressed(Some(0))
        );

        taps.on_down(None, 0, 0, Point::ZERO, 2_000);
        assert_eq!(
            taps.on_up(None, 0, Some(0), Point::new(100.0, 0.0), 2_300),
            TapResult::Tap(0)
        );
    }

    #[test]
    fn pointers_are_tracked_independently() {
        let first = PointerId::new(1).unwrap();
        let second = PointerId::new(2).unwrap();
        let mut taps = TapState::new();
        taps.on_down(Some(first), 0, 3, Point::ZERO, 0);
        taps.on_down(Some(second), 1, 4, Point::new(0.0, -50.0), 0);
        assert_eq!(taps.presses().count(), 2);

        assert!(taps.cancel(Some(first)));
        assert_eq!(
            taps.on_up(Some(first), 0, Some(3), Point::ZERO, 5),
            TapResult::Suppressed(None)
        );
        assert_eq!(
            taps.on_up(Some(second), 1, Some(4), Point::new(0.0, -50.0), 5),
            TapResult::Tap(4)
        );
    }
}
