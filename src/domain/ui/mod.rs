// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! Value objects for the page's timing and visibility knobs, independent
//! of any presentation framework.

pub mod newtypes;

pub use newtypes::{RotationInterval, VisibilityThreshold};
