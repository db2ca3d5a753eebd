// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits implemented by the host scene graph and by item templates.

use kurbo::Point;

/// Creates, positions, and parents the visual objects backing list slots.
///
/// A handle is whatever the host uses to address one instantiated item
/// template: a scene node, a widget id, an entity. The list never inspects it
/// beyond the calls below and [`ItemRenderer`].
pub trait SlotHost {
    /// Host-side handle to one instantiated item template.
    type Handle;

    /// Instantiates a new item template.
    fn create(&mut self) -> Self::Handle;

    /// Moves `handle` so its anchor sits at `position` in content space.
    fn set_position(&mut self, handle: &mut Self::Handle, position: Point);

    /// Attaches `handle` to the content node, or detaches it without destroying it.
    fn set_attached(&mut self, handle: &mut Self::Handle, attached: bool);

    /// Destroys `handle` when the list is torn down.
    ///
    /// The default implementation drops it.
    fn destroy(&mut self, handle: Self::Handle) {
        drop(handle);
    }
}

/// An item template that displays one record of type `T`.
pub trait ItemRenderer<T> {
    /// Displays `record`, replacing whatever was shown before.
    fn bind(&mut self, record: &T);

    /// Whether taps on this item should be reported to the list's tap handler.
    fn is_clickable(&self) -> bool {
        false
    }
}
