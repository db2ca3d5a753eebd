// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for [`RecycleList`](crate::RecycleList).

use kurbo::Size;

use crate::{
    ConfigError, DEFAULT_REFRESH_INTERVAL_MS, DEFAULT_TAP_MOVE_THRESHOLD, Geometry, Layout,
    LayoutMode,
};

/// Everything a list needs before its first dataset load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfig {
    /// Item arrangement.
    pub mode: LayoutMode,
    /// Item template geometry.
    pub geometry: Geometry,
    /// Size of the scroll viewport.
    pub viewport: Size,
    /// Refresh tick interval in milliseconds.
    pub refresh_interval_ms: u64,
    /// Pointer movement allowed during a tap, or `None` for unlimited.
    pub tap_move_threshold: Option<f64>,
    /// Press duration allowed for a tap in milliseconds, or `None` for unlimited.
    pub tap_time_threshold: Option<u64>,
}

impl ListConfig {
    /// Creates a configuration with the default 10 Hz refresh cadence and
    /// default tap thresholds.
    #[must_use]
    pub fn new(mode: LayoutMode, geometry: Geometry, viewport: Size) -> Self {
        Self {
            mode,
            geometry,
            viewport,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            tap_move_threshold: Some(DEFAULT_TAP_MOVE_THRESHOLD),
            tap_time_threshold: None,
        }
    }

    /// Sets the refresh tick interval.
    #[must_use]
    pub fn with_refresh_interval(mut self, interval_ms: u64) -> Self {
        self.refresh_interval_ms = interval_ms;
        self
    }

    /// Sets the tap thresholds.
    #[must_use]
    pub fn with_tap_thresholds(
        mut self,
        move_threshold: Option<f64>,
        time_threshold: Option<u64>,
    ) -> Self {
        self.tap_move_threshold = move_threshold;
        self.tap_time_threshold = time_threshold;
        self
    }

    /// Validates the geometry and viewport into a [`Layout`].
    pub fn layout(&self) -> Result<Layout, ConfigError> {
        Layout::new(self.mode, self.geometry, self.viewport)
    }
}
