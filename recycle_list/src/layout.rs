// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout modes and the slot capacity derived from the viewport.
//!
//! A [`Layout`] is the validated combination of a [`LayoutMode`], a
//! [`Geometry`], and a viewport size. Construction computes how many columns
//! and rows of slots are needed to cover the viewport; the result is fixed for
//! the lifetime of the layout.
//!
//! Linear modes add one extra slot so a partially scrolled item at either edge
//! is always covered. Grids cannot place a fractional track along their fill
//! axis, so that count is the whole number of items that fit.

use kurbo::{Point, Size};

use crate::util::{ceil_count, floor_index};
use crate::{Axis, ConfigError, Geometry};

/// How items are arranged in content space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// A single row scrolling along x.
    Horizontal,
    /// A single column scrolling along y.
    Vertical,
    /// A grid that fills along the given axis before advancing the other one.
    ///
    /// `Grid(Axis::Horizontal)` fills each row left to right and scrolls
    /// vertically. `Grid(Axis::Vertical)` fills each column top to bottom and
    /// scrolls horizontally.
    Grid(Axis),
}

impl LayoutMode {
    /// The axis along which the content scrolls.
    #[must_use]
    pub const fn scroll_axis(self) -> Axis {
        match self {
            Self::Horizontal | Self::Grid(Axis::Vertical) => Axis::Horizontal,
            Self::Vertical | Self::Grid(Axis::Horizontal) => Axis::Vertical,
        }
    }
}

/// Column/row coordinates of an item in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Zero-based column.
    pub column: usize,
    /// Zero-based row.
    pub row: usize,
}

/// A validated layout with a fixed slot capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    mode: LayoutMode,
    geometry: Geometry,
    viewport: Size,
    pitch: Size,
    start: Point,
    columns: usize,
    rows: usize,
}

impl Layout {
    /// Validates `geometry` and `viewport` and derives the slot capacity.
    ///
    /// Fails if the geometry is degenerate, the viewport is negative or
    /// non-finite, or a grid viewport cannot fit a single item along its fill
    /// axis.
    pub fn new(mode: LayoutMode, geometry: Geometry, viewport: Size) -> Result<Self, ConfigError> {
        geometry.validate()?;
        if !viewport.width.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "viewport.width",
            });
        }
        if !viewport.height.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "viewport.height",
            });
        }
        if viewport.width < 0.0 || viewport.height < 0.0 {
            return Err(ConfigError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let pitch = geometry.pitch();
        let mut columns = ceil_count(viewport.width, pitch.width).saturating_add(1);
        let mut rows = ceil_count(viewport.height, pitch.height).saturating_add(1);
        match mode {
            LayoutMode::Grid(Axis::Horizontal) => {
                columns = floor_index(viewport.width, pitch.width);
                if columns == 0 {
                    return Err(ConfigError::ZeroCapacity {
                        mode,
                        axis: Axis::Horizontal,
                    });
                }
            }
            LayoutMode::Grid(Axis::Vertical) => {
                rows = floor_index(viewport.height, pitch.height);
                if rows == 0 {
                    return Err(ConfigError::ZeroCapacity {
                        mode,
                        axis: Axis::Vertical,
                    });
                }
            }
            LayoutMode::Horizontal | LayoutMode::Vertical => {}
        }

        Ok(Self {
            mode,
            geometry,
            viewport,
            pitch,
            start: geometry.start_position(),
            columns,
            rows,
        })
    }

    /// Returns the layout mode.
    #[must_use]
    pub const fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Returns the item geometry.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the viewport size the capacity was derived from.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Item size plus spacing.
    #[must_use]
    pub const fn pitch(&self) -> Size {
        self.pitch
    }

    /// Anchor position of the item at index 0.
    #[must_use]
    pub const fn start_position(&self) -> Point {
        self.start
    }

    /// Number of slot columns covering the viewport.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of slot rows covering the viewport.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Maximum number of simultaneously active slots.
    ///
    /// This is also the size of every visible window.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        match self.mode {
            LayoutMode::Horizontal => self.columns,
            LayoutMode::Vertical => self.rows,
            LayoutMode::Grid(_) => self.columns.saturating_mul(self.rows),
        }
    }

    /// Column and row of `index`.
    ///
    /// Linear layouts report a single row (horizontal) or a single column
    /// (vertical).
    #[must_use]
    pub const fn grid_cell(&self, index: usize) -> GridCell {
        match self.mode {
            LayoutMode::Horizontal => GridCell {
                column: index,
                row: 0,
            },
            LayoutMode::Vertical => GridCell {
                column: 0,
                row: index,
            },
            LayoutMode::Grid(Axis::Horizontal) => GridCell {
                column: index % self.columns,
                row: index / self.columns,
            },
            LayoutMode::Grid(Axis::Vertical) => GridCell {
                column: index / self.rows,
                row: index % self.rows,
            },
        }
    }

    /// Content-space anchor position of the item at `index`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Point {
        let cell = self.grid_cell(index);
        Point::new(
            self.start.x + cell.column as f64 * self.pitch.width,
            self.start.y - cell.row as f64 * self.pitch.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Point, Size};

    use super::{GridCell, Layout, LayoutMode};
    use crate::{Axis, ConfigError, Geometry};

    fn square(extent: f64) -> Geometry {
        Geometry::new(Size::new(extent, extent)).with_anchor(Point::ZERO)
    }

    #[test]
    fn linear_capacity_overscans_by_one() {
        let layout = Layout::new(LayoutMode::Vertical, square(50.0), Size::new(100.0, 120.0)).unwrap();
        // ceil(120 / 50) + 1.
        assert_eq!(layout.capacity(), 4);

        let layout =
            Layout::new(LayoutMode::Horizontal, square(50.0), Size::new(100.0, 120.0)).unwrap();
        // Exact fit still gets one overscan slot.
        assert_eq!(layout.capacity(), 3);
    }

    #[test]
    fn grid_capacity_floors_the_fill_axis() {
        let geometry = square(50.0);
        let layout = Layout::new(
            LayoutMode::Grid(Axis::Horizontal),
            geometry,
            Size::new(170.0, 100.0),
        )
        .unwrap();
        assert_eq!(layout.columns(), 3);
        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.capacity(), 9);

        let layout = Layout::new(
            LayoutMode::Grid(Axis::Vertical),
            geometry,
            Size::new(100.0, 210.0),
        )
        .unwrap();
        assert_eq!(layout.rows(), 4);
        assert_eq!(layout.columns(), 3);
        assert_eq!(layout.capacity(), 12);
    }

    #[test]
    fn grid_narrower_than_one_item_is_rejected() {
        let err = Layout::new(
            LayoutMode::Grid(Axis::Horizontal),
            square(50.0),
            Size::new(40.0, 400.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroCapacity {
                mode: LayoutMode::Grid(Axis::Horizontal),
                axis: Axis::Horizontal,
            }
        );
    }

    #[test]
    fn negative_viewport_is_rejected() {
        let err = Layout::new(LayoutMode::Vertical, square(50.0), Size::new(10.0, -1.0)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidViewport { .. }));
    }

    #[test]
    fn vertical_fill_grid_maps_index_to_column_then_row() {
        // Four rows tall: index 9 lands in column 2, row 1.
        let layout = Layout::new(
            LayoutMode::Grid(Axis::Vertical),
            square(50.0),
            Size::new(100.0, 200.0),
        )
        .unwrap();
        assert_eq!(layout.rows(), 4);
        assert_eq!(layout.grid_cell(9), GridCell { column: 2, row: 1 });
        assert_eq!(layout.position_of(9), Point::new(100.0, -50.0));
    }

    #[test]
    fn horizontal_fill_grid_maps_index_to_row_then_column() {
        let layout = Layout::new(
            LayoutMode::Grid(Axis::Horizontal),
            square(50.0),
            Size::new(150.0, 100.0),
        )
        .unwrap();
        assert_eq!(layout.columns(), 3);
        assert_eq!(layout.grid_cell(7), GridCell { column: 1, row: 2 });
        assert_eq!(layout.position_of(7), Point::new(50.0, -100.0));
    }

    #[test]
    fn linear_positions_step_by_pitch_from_padded_origin() {
        let geometry = Geometry::new(Size::new(40.0, 20.0))
            .with_spacing(Size::new(10.0, 5.0))
            .with_padding(Insets::new(3.0, 7.0, 0.0, 0.0));
        let vertical = Layout::new(LayoutMode::Vertical, geometry, Size::new(40.0, 100.0)).unwrap();
        // start = (40 * 0.5 + 3, -(20 * 0.5 + 7)) = (23, -17); pitch.height = 25.
        assert_eq!(vertical.position_of(0), Point::new(23.0, -17.0));
        assert_eq!(vertical.position_of(4), Point::new(23.0, -117.0));

        let horizontal =
            Layout::new(LayoutMode::Horizontal, geometry, Size::new(200.0, 20.0)).unwrap();
        // pitch.width = 50.
        assert_eq!(horizontal.position_of(3), Point::new(173.0, -17.0));
    }

    #[test]
    fn scroll_axis_follows_mode() {
        assert_eq!(LayoutMode::Horizontal.scroll_axis(), Axis::Horizontal);
        assert_eq!(LayoutMode::Vertical.scroll_axis(), Axis::Vertical);
        assert_eq!(LayoutMode::Grid(Axis::Horizontal).scroll_axis(), Axis::Vertical);
        assert_eq!(LayoutMode::Grid(Axis::Vertical).scroll_axis(), Axis::Horizontal);
    }
}
