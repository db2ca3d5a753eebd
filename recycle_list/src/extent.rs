// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Total scrollable size of the content node.

use kurbo::Size;

use crate::{Axis, Layout, LayoutMode};

/// Scrollable size of the content along the axes the list controls.
///
/// Only the scroll axis is determined by the data; the other dimension is
/// left to the host and reported as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentExtent {
    /// Content width, for horizontally scrolling layouts.
    pub width: Option<f64>,
    /// Content height, for vertically scrolling layouts.
    pub height: Option<f64>,
}

impl ContentExtent {
    /// Resolves to a concrete size, taking unset dimensions from `fallback`.
    #[must_use]
    pub fn resolve(&self, fallback: Size) -> Size {
        Size::new(
            self.width.unwrap_or(fallback.width),
            self.height.unwrap_or(fallback.height),
        )
    }
}

/// Computes the content extent for `len` items.
///
/// Padding is always included, so an empty dataset collapses to the padding
/// along the scroll axis.
#[must_use]
pub fn content_extent(layout: &Layout, len: usize) -> ContentExtent {
    let pitch = layout.pitch();
    let padding = layout.geometry().padding;
    match layout.mode() {
        LayoutMode::Vertical => ContentExtent {
            width: None,
            height: Some(padding.y0 + len as f64 * pitch.height + padding.y1),
        },
        LayoutMode::Horizontal => ContentExtent {
            width: Some(padding.x0 + len as f64 * pitch.width + padding.x1),
            height: None,
        },
        LayoutMode::Grid(Axis::Horizontal) => {
            let rows = len.div_ceil(layout.columns());
            ContentExtent {
                width: None,
                height: Some(padding.y0 + rows as f64 * pitch.height + padding.y1),
            }
        }
        LayoutMode::Grid(Axis::Vertical) => {
            let columns = len.div_ceil(layout.rows());
            ContentExtent {
                width: Some(padding.x0 + columns as f64 * pitch.width + padding.x1),
                height: None,
            }
        }
    }
}
