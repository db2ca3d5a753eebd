// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-capacity pool of recyclable slots.
//!
//! The pool keeps two lists: *active* slots attached to the content node and
//! *idle* handles that were detached when the active count shrank. Handles are
//! only created when the idle list is empty, so the number of handles ever
//! created is bounded by the largest active count ever requested, never by the
//! dataset size.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::Point;

use crate::SlotHost;

/// One active slot: a host handle plus its current data binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<H> {
    handle: H,
    index: Option<usize>,
    position: Option<Point>,
}

impl<H> Slot<H> {
    fn unbound(handle: H) -> Self {
        Self {
            handle,
            index: None,
            position: None,
        }
    }

    /// Returns the host handle.
    #[must_use]
    pub const fn handle(&self) -> &H {
        &self.handle
    }

    /// Returns the host handle mutably.
    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// Dataset index currently bound to this slot, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Content-space position last written to the host, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        self.position
    }

    pub(crate) fn rebind(&mut self, index: usize, position: Point) {
        self.index = Some(index);
        self.position = Some(position);
    }
}

/// Active and idle slot handles.
#[derive(Debug, Clone)]
pub struct SlotPool<H> {
    active: Vec<Slot<H>>,
    idle: VecDeque<H>,
    created: usize,
}

impl<H> Default for SlotPool<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SlotPool<H> {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Vec::new(),
            idle: VecDeque::new(),
            created: 0,
        }
    }

    /// Resizes the active set to exactly `count` slots.
    ///
    /// Growing reuses idle handles (oldest first) before asking `host` to
    /// create new ones. Shrinking detaches slots from the end of the active set
    /// and parks their handles in the idle list. Reattached slots start unbound.
    pub fn ensure<S>(&mut self, host: &mut S, count: usize) -> &mut [Slot<H>]
    where
        S: SlotHost<Handle = H>,
    {
        while self.active.len() < count {
            let mut handle = match self.idle.pop_front() {
                Some(handle) => handle,
                None => {
                    self.created += 1;
                    host.create()
                }
            };
            host.set_attached(&mut handle, true);
            self.active.push(Slot::unbound(handle));
        }
        while self.active.len() > count {
            let Some(slot) = self.active.pop() else {
                break;
            };
            let mut handle = slot.handle;
            host.set_attached(&mut handle, false);
            self.idle.push_back(handle);
        }
        &mut self.active
    }

    /// Detaches every active slot and hands all handles to [`SlotHost::destroy`].
    pub fn release_all<S>(&mut self, host: &mut S)
    where
        S: SlotHost<Handle = H>,
    {
        for slot in self.active.drain(..) {
            let mut handle = slot.handle;
            host.set_attached(&mut handle, false);
            host.destroy(handle);
        }
        for handle in self.idle.drain(..) {
            host.destroy(handle);
        }
    }

    /// Active slots, in physical order.
    #[must_use]
    pub fn active(&self) -> &[Slot<H>] {
        &self.active
    }

    /// Active slots, mutably.
    pub fn active_mut(&mut self) -> &mut [Slot<H>] {
        &mut self.active
    }

    /// Number of active slots.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of detached, reusable handles.
    #[must_use]
    pub fn idle_len(&self) -> usize {
        self.idle.len()
    }

    /// Number of handles currently owned by the pool (active plus idle).
    #[must_use]
    pub fn live_handles(&self) -> usize {
        self.active.len() + self.idle.len()
    }

    /// Number of handles this pool has ever asked the host to create.
    #[must_use]
    pub const fn created(&self) -> usize {
        self.created
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::SlotPool;
    use crate::SlotHost;

    #[derive(Debug, Default)]
    struct CountingHost {
        next_id: u32,
        attached: Vec<u32>,
        destroyed: Vec<u32>,
    }

    impl SlotHost for CountingHost {
        type Handle = u32;

        fn create(&mut self) -> u32 {
            self.next_id += 1;
            self.next_id
        }

        fn set_position(&mut self, _handle: &mut u32, _position: Point) {}

        fn set_attached(&mut self, handle: &mut u32, attached: bool) {
            if attached {
                self.attached.push(*handle);
            } else {
                self.attached.retain(|h| h != handle);
            }
        }

        fn destroy(&mut self, handle: u32) {
            self.destroyed.push(handle);
        }
    }

    #[test]
    fn grows_by_creating_handles() {
        let mut host = CountingHost::default();
        let mut pool = SlotPool::new();
        let slots = pool.ensure(&mut host, 3);
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|slot| slot.index().is_none()));
        assert_eq!(pool.created(), 3);
        assert_eq!(host.attached, [1, 2, 3]);
    }

    #[test]
    fn shrinking_parks_handles_and_growing_reuses_them() {
        let mut host = CountingHost::default();
        let mut pool = SlotPool::new();
        pool.ensure(&mut host, 5);
        pool.active_mut()[3].rebind(3, Point::new(0.0, -30.0));

        pool.ensure(&mut host, 2);
        assert_eq!(pool.active_len(), 2);
        assert_eq!(pool.idle_len(), 3);
        assert_eq!(pool.live_handles(), 5);
        assert_eq!(host.attached, [1, 2]);

        // Idle handles come back before anything new is created, and unbound.
        let slots = pool.ensure(&mut host, 4);
        assert_eq!(slots[3].index(), None);
        assert_eq!(pool.created(), 5);
        assert_eq!(pool.idle_len(), 1);

        pool.ensure(&mut host, 7);
        assert_eq!(pool.created(), 7);
        assert_eq!(pool.live_handles(), 7);
    }

    #[test]
    fn release_all_destroys_every_handle() {
        let mut host = CountingHost::default();
        let mut pool = SlotPool::new();
        pool.ensure(&mut host, 4);
        pool.ensure(&mut host, 1);
        pool.release_all(&mut host);

        assert_eq!(pool.live_handles(), 0);
        assert!(host.attached.is_empty());
        let mut destroyed = host.destroyed.clone();
        destroyed.sort_unstable();
        assert_eq!(destroyed, [1, 2, 3, 4]);
    }
}
