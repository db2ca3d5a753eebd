// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible window computation.

use core::ops::Range;

use kurbo::Vec2;

use crate::util::floor_index;
use crate::{Axis, Layout, LayoutMode};

/// A contiguous range of dataset indices eligible for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    /// First visible index (inclusive).
    pub start: usize,
    /// One past the last visible index (exclusive).
    pub end: usize,
}

impl VisibleWindow {
    /// The empty window at index 0.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Number of indices in the window.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the window holds no indices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The window as an index range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns `true` if `index` lies inside the window.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Computes the window of `len` items visible at `scroll_offset`.
///
/// `scroll_offset` is the position of the content node relative to the
/// viewport. The leading edge differs per axis: content scrolled towards
/// positive x is before the first column, content scrolled towards negative y
/// is above the first row. Either case pins the window to index 0.
///
/// The window always spans `min(layout.capacity(), len)` indices. When the
/// offset points past the end of the data, the window is pulled back so that
/// it ends exactly at `len`.
#[must_use]
pub fn compute_window(layout: &Layout, scroll_offset: Vec2, len: usize) -> VisibleWindow {
    let pitch = layout.pitch();
    let raw_start = match layout.mode() {
        LayoutMode::Horizontal => leading_index_x(scroll_offset.x, pitch.width),
        LayoutMode::Vertical => leading_index_y(scroll_offset.y, pitch.height),
        LayoutMode::Grid(Axis::Horizontal) => {
            leading_index_y(scroll_offset.y, pitch.height).saturating_mul(layout.columns())
        }
        LayoutMode::Grid(Axis::Vertical) => {
            leading_index_x(scroll_offset.x, pitch.width).saturating_mul(layout.rows())
        }
    };

    let size = layout.capacity();
    let end = raw_start.saturating_add(size);
    if end > len {
        VisibleWindow {
            start: len.saturating_sub(size),
            end: len,
        }
    } else {
        VisibleWindow {
            start: raw_start,
            end,
        }
    }
}

/// Leading track for a horizontal offset; `x > 0` is before the start.
fn leading_index_x(x: f64, pitch: f64) -> usize {
    if x > 0.0 { 0 } else { floor_index(-x, pitch) }
}

/// Leading track for a vertical offset; `y < 0` is before the start.
fn leading_index_y(y: f64, pitch: f64) -> usize {
    if y < 0.0 { 0 } else { floor_index(y, pitch) }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{VisibleWindow, compute_window};
    use crate::{Axis, Geometry, Layout, LayoutMode};

    fn layout(mode: LayoutMode, viewport: Size) -> Layout {
        let geometry = Geometry::new(Size::new(50.0, 50.0)).with_anchor(Point::ZERO);
        Layout::new(mode, geometry, viewport).unwrap()
    }

    #[test]
    fn vertical_window_follows_positive_y() {
        // Capacity: ceil(200 / 50) + 1 = 5.
        let layout = layout(LayoutMode::Vertical, Size::new(50.0, 200.0));
        assert_eq!(
            compute_window(&layout, Vec2::new(0.0, 0.0), 100),
            VisibleWindow { start: 0, end: 5 }
        );
        assert_eq!(
            compute_window(&layout, Vec2::new(0.0, 149.0), 100),
            VisibleWindow { start: 2, end: 7 }
        );
        // Pulled past the top: pinned to the start.
        assert_eq!(
            compute_window(&layout, Vec2::new(0.0, -500.0), 100),
            VisibleWindow { start: 0, end: 5 }
        );
    }

    #[test]
    fn horizontal_window_follows_negative_x() {
        // Capacity: ceil(100 / 50) + 1 = 3.
        let layout = layout(LayoutMode::Horizontal, Size::new(100.0, 50.0));
        assert_eq!(
            compute_window(&layout, Vec2::new(-260.0, 0.0), 100),
            VisibleWindow { start: 5, end: 8 }
        );
        // Positive x is before the first column.
        assert_eq!(
            compute_window(&layout, Vec2::new(260.0, 0.0), 100),
            VisibleWindow { start: 0, end: 3 }
        );
    }

    #[test]
    fn window_is_pulled_back_at_the_end() {
        let layout = layout(LayoutMode::Vertical, Size::new(50.0, 200.0));
        assert_eq!(
            compute_window(&layout, Vec2::new(0.0, 1_000.0), 22),
            VisibleWindow { start: 17, end: 22 }
        );
        assert_eq!(
            compute_window(&layout, Vec2::new(0.0, f64::INFINITY), 22),
            VisibleWindow { start: 17, end: 22 }
        );
    }

    #[test]
    fn short_dataset_yields_short_window() {
        let layout = layout(LayoutMode::Vertical, Size::new(50.0, 200.0));
        assert_eq!(
            compute_window(&layout, Vec2::new(0.0, 300.0), 3),
            VisibleWindow { start: 0, end: 3 }
        );
        let empty = compute_window(&layout, Vec2::new(0.0, 300.0), 0);
        assert!(empty.is_empty());
        assert_eq!(empty, VisibleWindow::EMPTY);
    }

    #[test]
    fn grid_windows_start_on_track_boundaries() {
        // Three columns, rows = ceil(100 / 50) + 1 = 3.
        let rows_first = layout(LayoutMode::Grid(Axis::Horizontal), Size::new(150.0, 100.0));
        assert_eq!(
            compute_window(&rows_first, Vec2::new(0.0, 120.0), 100),
            VisibleWindow { start: 6, end: 15 }
        );
        assert_eq!(
            compute_window(&rows_first, Vec2::new(0.0, -10.0), 100),
            VisibleWindow { start: 0, end: 9 }
        );

        // Four rows, columns = ceil(100 / 50) + 1 = 3.
        let columns_first = layout(LayoutMode::Grid(Axis::Vertical), Size::new(100.0, 200.0));
        assert_eq!(
            compute_window(&columns_first, Vec2::new(-60.0, 0.0), 100),
            VisibleWindow { start: 4, end: 16 }
        );
        assert_eq!(
            compute_window(&columns_first, Vec2::new(60.0, 0.0), 100),
            VisibleWindow { start: 0, end: 12 }
        );
    }

    #[test]
    fn nan_offset_pins_to_start() {
        let layout = layout(LayoutMode::Horizontal, Size::new(100.0, 50.0));
        assert_eq!(
            compute_window(&layout, Vec2::new(f64::NAN, 0.0), 10),
            VisibleWindow { start: 0, end: 3 }
        );
    }

    #[test]
    fn window_helpers() {
        let window = VisibleWindow { start: 3, end: 6 };
        assert_eq!(window.len(), 3);
        assert!(window.contains(3));
        assert!(!window.contains(6));
        assert_eq!(window.range().collect::<alloc::vec::Vec<_>>(), [3, 4, 5]);
    }
}
