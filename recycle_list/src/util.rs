// Copyright 2025 the Recycle List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float/index conversions that work without `std` float intrinsics.

/// `floor(distance / pitch)` for a non-negative `distance`, saturating at `usize::MAX`.
///
/// NaN maps to `0`. `pitch` is validated positive at construction.
#[allow(
    clippy::cast_possible_truncation,
    reason = "float-to-int casts saturate, and truncation is floor for non-negative values"
)]
pub(crate) fn floor_index(distance: f64, pitch: f64) -> usize {
    (distance / pitch) as usize
}

/// `ceil(extent / pitch)` for a non-negative `extent`, saturating at `usize::MAX`.
pub(crate) fn ceil_count(extent: f64, pitch: f64) -> usize {
    let ratio = extent / pitch;
    let floor = floor_index(extent, pitch);
    if (floor as f64) < ratio {
        floor.saturating_add(1)
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::{ceil_count, floor_index};

    #[test]
    fn floor_and_ceil_match_float_semantics() {
        assert_eq!(floor_index(0.0, 50.0), 0);
        assert_eq!(floor_index(49.9, 50.0), 0);
        assert_eq!(floor_index(50.0, 50.0), 1);
        assert_eq!(floor_index(f64::NAN, 50.0), 0);
        assert_eq!(floor_index(f64::INFINITY, 50.0), usize::MAX);

        assert_eq!(ceil_count(0.0, 50.0), 0);
        assert_eq!(ceil_count(1.0, 50.0), 1);
        assert_eq!(ceil_count(100.0, 50.0), 2);
        assert_eq!(ceil_count(101.0, 50.0), 3);
    }
}
