// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Layout offsets and thresholds are `f32`; compare them with the `approx`
//! macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
