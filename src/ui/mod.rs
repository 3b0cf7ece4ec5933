// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! The page follows the Elm-style "state down, messages up" pattern: views
//! borrow state from the application and report interactions as messages.
//!
//! - [`navbar`] - Fixed top bar with section links and the compact menu
//! - [`sections`] - The page blocks, top to bottom
//! - [`layout`] - Fixed block heights and the section regions derived from them
//! - [`images`] - Decoded SVG handles for gallery slides and avatars
//! - [`notifications`] - Toast notifications for form feedback
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod images;
pub mod layout;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
