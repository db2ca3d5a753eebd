// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping of a visible window onto the active slots.
//!
//! Logical index `i` is always served by physical slot `i % active`. As the
//! window slides by less than the active count, the indices that stay visible
//! keep their slots, and only the slots whose index left the window are
//! rebound, which makes the set of slots behave like a ring buffer over the
//! data.
//!
//! A slot is rebound when the position computed for its new index differs
//! from the position it was last moved to. Positions are a pure function of
//! the index, so an unchanged position means an unchanged binding. A forced
//! pass rebinds everything, which is required after the data itself changed.

use crate::{ItemRenderer, Layout, Slot, SlotHost, VisibleWindow};

/// Write counts from one [`assign_slots`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Slots examined.
    pub visited: usize,
    /// Slots that were moved and rebound.
    pub rebound: usize,
}

/// Binds the indices of `window` to `slots`, writing only where needed.
///
/// Indices beyond `dataset` are skipped; with a window from
/// [`compute_window`](crate::compute_window) and as many slots as the window
/// holds, that never happens.
pub fn assign_slots<T, S>(
    layout: &Layout,
    window: VisibleWindow,
    slots: &mut [Slot<S::Handle>],
    dataset: &[T],
    host: &mut S,
    forced: bool,
) -> ApplyStats
where
    S: SlotHost,
    S::Handle: ItemRenderer<T>,
{
    let mut stats = ApplyStats::default();
    let active = slots.len();
    if active == 0 {
        return stats;
    }

    for index in window.range().take(active) {
        let Some(record) = dataset.get(index) else {
            break;
        };
        let physical = index % active;
        let slot = &mut slots[physical];
        stats.visited += 1;

        let target = layout.position_of(index);
        if forced || slot.position() != Some(target) {
            host.set_position(slot.handle_mut(), target);
            slot.handle_mut().bind(record);
            slot.rebind(index, target);
            stats.rebound += 1;
            tracing::trace!(index, slot = physical, x = target.x, y = target.y, "rebound slot");
        }
    }
    stats
}
