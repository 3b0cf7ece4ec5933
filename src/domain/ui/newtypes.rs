// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Clamped wrappers for the page's timing and visibility knobs, so that
//! values read from `settings.toml` are valid by construction.

use std::time::Duration;

// =============================================================================
// Rotation Interval
// =============================================================================

/// Testimonial rotation interval bounds, in milliseconds.
pub mod rotation_bounds {
    /// Minimum interval between two automatic advances.
    pub const MIN_MS: u64 = 1_000;
    /// Maximum interval between two automatic advances.
    pub const MAX_MS: u64 = 60_000;
    /// Default interval between two automatic advances.
    pub const DEFAULT_MS: u64 = 5_000;
}

/// Interval at which the testimonial carousel advances on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationInterval(u64);

impl RotationInterval {
    /// Creates an interval from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(rotation_bounds::MIN_MS, rotation_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(rotation_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Visibility Threshold
// =============================================================================

/// Visibility threshold bounds, as a fraction of a section's area.
pub mod visibility_bounds {
    /// Smallest fraction that still counts as "in view".
    pub const MIN: f32 = 0.05;
    /// A section must be entirely visible.
    pub const MAX: f32 = 1.0;
    /// Default fraction.
    pub const DEFAULT: f32 = 0.30;
}

/// Fraction of a section's area that must be inside the viewport for the
/// section to count as intersecting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityThreshold(f32);

impl VisibilityThreshold {
    /// Creates a threshold, clamping to the valid range.
    ///
    /// `NaN` falls back to the default.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self::default();
        }
        Self(fraction.clamp(visibility_bounds::MIN, visibility_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether `visible_fraction` meets this threshold.
    #[must_use]
    pub fn is_met_by(self, visible_fraction: f32) -> bool {
        visible_fraction >= self.0
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self(visibility_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn rotation_interval_clamps_to_bounds() {
        assert_eq!(
            RotationInterval::from_millis(10).as_millis(),
            rotation_bounds::MIN_MS
        );
        assert_eq!(
            RotationInterval::from_millis(u64::MAX).as_millis(),
            rotation_bounds::MAX_MS
        );
        assert_eq!(RotationInterval::from_millis(7_500).as_millis(), 7_500);
    }

    #[test]
    fn rotation_interval_default_is_five_seconds() {
        assert_eq!(
            RotationInterval::default().as_duration(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn visibility_threshold_clamps_and_rejects_nan() {
        assert_abs_diff_eq!(VisibilityThreshold::new(0.0).value(), 0.05);
        assert_abs_diff_eq!(VisibilityThreshold::new(3.0).value(), 1.0);
        assert_abs_diff_eq!(VisibilityThreshold::new(f32::NAN).value(), 0.30);
    }

    #[test]
    fn threshold_is_inclusive() {
        let threshold = VisibilityThreshold::new(0.5);
        assert!(threshold.is_met_by(0.5));
        assert!(threshold.is_met_by(0.75));
        assert!(!threshold.is_met_by(0.49));
    }
}
