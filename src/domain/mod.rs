// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core page types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`section`]: Page sections and their anchors ([`Section`](section::Section))
//! - [`inquiry`]: Contact inquiry types ([`ContactFormData`](inquiry::ContactFormData),
//!   [`PropertyType`](inquiry::PropertyType), [`FormField`](inquiry::FormField))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`ui`]: UI value objects ([`RotationInterval`](ui::newtypes::RotationInterval),
//!   [`VisibilityThreshold`](ui::newtypes::VisibilityThreshold))

pub mod diagnostics;
pub mod inquiry;
pub mod section;
pub mod ui;
