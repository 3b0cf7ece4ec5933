// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! The clamping ranges live with the newtypes in [`crate::domain`]; this
//! module re-exposes them under configuration names so the settings file,
//! the CLI and the tests read from one place.

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::ui::newtypes::{rotation_bounds, visibility_bounds};

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default delay between two automatic testimonial advances (ms).
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = rotation_bounds::DEFAULT_MS;

/// Minimum rotation interval (ms).
pub const MIN_ROTATION_INTERVAL_MS: u64 = rotation_bounds::MIN_MS;

/// Maximum rotation interval (ms).
pub const MAX_ROTATION_INTERVAL_MS: u64 = rotation_bounds::MAX_MS;

// ==========================================================================
// Visibility Tracking Defaults
// ==========================================================================

/// Default fraction of a section that must be on screen to mark it active.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = visibility_bounds::DEFAULT;

pub const MIN_VISIBILITY_THRESHOLD: f32 = visibility_bounds::MIN;

pub const MAX_VISIBILITY_THRESHOLD: f32 = visibility_bounds::MAX;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Smallest window the layout supports.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// Compile-time guarantees that defaults sit inside their ranges.
const _: () = {
    assert!(DEFAULT_ROTATION_INTERVAL_MS >= MIN_ROTATION_INTERVAL_MS);
    assert!(DEFAULT_ROTATION_INTERVAL_MS <= MAX_ROTATION_INTERVAL_MS);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);
};
