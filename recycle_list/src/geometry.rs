// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item geometry: template size, anchor, spacing, and content padding.

use kurbo::{Insets, Point, Size};

use crate::ConfigError;
use crate::error::Edge;

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

/// Geometry shared by every item of a list.
///
/// Content space is y-up: the first row sits just below the top padding at a
/// negative y, and later rows move further down (more negative). Columns grow
/// towards positive x. This matches scene graphs whose content node is anchored
/// at its top-left corner.
///
/// All items share one template, so this is fixed for the lifetime of a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Size of the item template.
    pub item_size: Size,
    /// Normalized anchor of the item template; `(0.5, 0.5)` is the center.
    ///
    /// Slot positions are reported for this anchor point.
    pub anchor: Point,
    /// Gap between neighbouring items (`width` between columns, `height` between rows).
    pub spacing: Size,
    /// Padding around the content: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub padding: Insets,
}

impl Geometry {
    /// Creates geometry for an item template of `item_size` with a centered
    /// anchor, no spacing, and no padding.
    #[must_use]
    pub fn new(item_size: Size) -> Self {
        Self {
            item_size,
            anchor: Point::new(0.5, 0.5),
            spacing: Size::ZERO,
            padding: Insets::ZERO,
        }
    }

    /// Sets the normalized template anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the spacing between items.
    #[must_use]
    pub fn with_spacing(mut self, spacing: Size) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the content padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Distance between the origins of neighbouring items: item size plus spacing.
    #[must_use]
    pub fn pitch(&self) -> Size {
        Size::new(
            self.item_size.width + self.spacing.width,
            self.item_size.height + self.spacing.height,
        )
    }

    /// Anchor position of the item at index 0.
    #[must_use]
    pub fn start_position(&self) -> Point {
        Point::new(
            self.item_size.width * self.anchor.x + self.padding.x0,
            -(self.item_size.height * self.anchor.y + self.padding.y0),
        )
    }

    /// Checks that the geometry can drive a layout.
    ///
    /// Item extents must be positive, spacing and padding non-negative, and
    /// every field finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("item_size.width", self.item_size.width),
            ("item_size.height", self.item_size.height),
            ("anchor.x", self.anchor.x),
            ("anchor.y", self.anchor.y),
            ("spacing.width", self.spacing.width),
            ("spacing.height", self.spacing.height),
            ("padding.x0", self.padding.x0),
            ("padding.y0", self.padding.y0),
            ("padding.x1", self.padding.x1),
            ("padding.y1", self.padding.y1),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        for (axis, extent) in [
            (Axis::Horizontal, self.item_size.width),
            (Axis::Vertical, self.item_size.height),
        ] {
            if extent <= 0.0 {
                return Err(ConfigError::NonPositiveItemExtent { axis, extent });
            }
        }

        for (axis, spacing) in [
            (Axis::Horizontal, self.spacing.width),
            (Axis::Vertical, self.spacing.height),
        ] {
            if spacing < 0.0 {
                return Err(ConfigError::NegativeSpacing { axis, spacing });
            }
        }

        for (edge, padding) in [
            (Edge::Left, self.padding.x0),
            (Edge::Top, self.padding.y0),
            (Edge::Right, self.padding.x1),
            (Edge::Bottom, self.padding.y1),
        ] {
            if padding < 0.0 {
                return Err(ConfigError::NegativePadding { edge, padding });
            }
        }

        Ok(())
    }
}
