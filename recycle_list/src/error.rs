// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Only construction can fail. Once a [`Layout`](crate::Layout) exists, every
//! windowing operation is total: empty datasets and out-of-range scroll offsets
//! are clamped rather than reported.

use thiserror::Error;

use crate::{Axis, LayoutMode};

/// A padding edge, used to report which inset was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Leading horizontal edge.
    Left,
    /// Leading vertical edge.
    Top,
    /// Trailing horizontal edge.
    Right,
    /// Trailing vertical edge.
    Bottom,
}

/// Rejected list configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The item template has a zero or negative size along `axis`.
    #[error("item extent along {axis:?} must be positive, got {extent}")]
    NonPositiveItemExtent {
        /// Axis of the offending dimension.
        axis: Axis,
        /// The rejected extent.
        extent: f64,
    },

    /// Spacing between items is negative.
    #[error("spacing along {axis:?} must not be negative, got {spacing}")]
    NegativeSpacing {
        /// Axis of the offending spacing.
        axis: Axis,
        /// The rejected spacing.
        spacing: f64,
    },

    /// A content padding edge is negative.
    #[error("{edge:?} padding must not be negative, got {padding}")]
    NegativePadding {
        /// The offending edge.
        edge: Edge,
        /// The rejected padding.
        padding: f64,
    },

    /// A geometry or viewport field is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The viewport has a negative size.
    #[error("viewport size must not be negative, got {width}x{height}")]
    InvalidViewport {
        /// Viewport width.
        width: f64,
        /// Viewport height.
        height: f64,
    },

    /// The viewport cannot fit a single item along the grid's fill axis.
    #[error("{mode:?} viewport is smaller than one item along {axis:?}; no slots fit")]
    ZeroCapacity {
        /// Layout mode that produced the zero capacity.
        mode: LayoutMode,
        /// The axis that fits no item.
        axis: Axis,
    },
}
