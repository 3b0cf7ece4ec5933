// SPDX-License-Identifier: MPL-2.0
//! Section visibility tracking.
//!
//! [`IntersectionObserver`] turns viewport changes into per-section
//! intersection events; [`SectionTracker`] folds those events into the
//! active section that highlights the navigation bar.

pub mod observer;
pub mod tracker;

pub use observer::{IntersectionEvent, IntersectionObserver, Region, Span};
pub use tracker::SectionTracker;
