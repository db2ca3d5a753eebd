// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recycle List: a windowed list core that recycles a fixed pool of slots.
//!
//! Given a large ordered dataset and a viewport, this crate keeps a small,
//! fixed number of visual slots bound to the items that intersect the
//! viewport, rebinding slots as the content scrolls instead of creating one
//! visual object per record.
//!
//! The core concepts are:
//!
//! - [`Geometry`] and [`Layout`]: the item template's size, spacing, and
//!   padding, combined with a [`LayoutMode`] and a viewport into a fixed slot
//!   capacity.
//! - [`compute_window`]: which contiguous range of indices is visible at a
//!   scroll offset, as a [`VisibleWindow`].
//! - [`SlotPool`]: active and idle slot handles, grown on demand and never
//!   destroyed while the list lives.
//! - [`assign_slots`]: the ring-buffer mapping of the window onto active
//!   slots, writing only slots whose position changed.
//! - [`content_extent`]: the total scrollable size implied by the data.
//! - [`RefreshScheduler`]: a fixed-cadence tick that decouples recomputation
//!   from scroll events.
//! - [`TapState`]: tap recognition that survives slot recycling.
//! - [`RecycleList`]: the controller that owns all of the above.
//!
//! This crate deliberately does **not** know about any particular scene graph.
//! Hosts implement [`SlotHost`] to create, move, and park item templates, and
//! item templates implement [`ItemRenderer`] to display one record.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use recycle_list::{Geometry, Layout, LayoutMode, compute_window, content_extent};
//!
//! // Rows 50 units tall in a 200 unit viewport: ceil(200 / 50) + 1 = 5 slots.
//! let geometry = Geometry::new(Size::new(300.0, 50.0));
//! let layout = Layout::new(LayoutMode::Vertical, geometry, Size::new(300.0, 200.0)).unwrap();
//! assert_eq!(layout.capacity(), 5);
//!
//! // 1000 rows scrolled down by 1234 units.
//! let window = compute_window(&layout, Vec2::new(0.0, 1234.0), 1000);
//! assert_eq!(window.range(), 24..29);
//! assert_eq!(content_extent(&layout, 1000).height, Some(50_000.0));
//! ```
//!
//! ## Coordinates
//!
//! Slot positions are reported in content space with y pointing up: the first
//! row sits below the top padding at a negative y. Scroll offsets are the
//! content node's position relative to the viewport, so scrolling a vertical
//! list down moves the offset towards positive y, and scrolling a horizontal
//! list right moves it towards negative x.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` for `kurbo`.
//! - `libm`: use `libm` for `kurbo` in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod assign;
mod config;
mod controller;
mod error;
mod extent;
mod geometry;
mod host;
mod layout;
mod pool;
mod scheduler;
mod tap;
mod util;
mod window;

pub use assign::{ApplyStats, assign_slots};
pub use config::ListConfig;
pub use controller::RecycleList;
pub use error::{ConfigError, Edge};
pub use extent::{ContentExtent, content_extent};
pub use geometry::{Axis, Geometry};
pub use host::{ItemRenderer, SlotHost};
pub use layout::{GridCell, Layout, LayoutMode};
pub use pool::{Slot, SlotPool};
pub use scheduler::{
    DEFAULT_REFRESH_INTERVAL_MS, Refresh, RefreshFlags, RefreshScheduler, SchedulerState,
};
pub use tap::{DEFAULT_TAP_MOVE_THRESHOLD, PointerId, Press, TapResult, TapState};
pub use window::{VisibleWindow, compute_window};
