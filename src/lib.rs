// SPDX-License-Identifier: MPL-2.0
//! `yadadri360` is the single-page brochure of the Yadadri 360° real-estate
//! brokerage, built with the Iced GUI framework.
//!
//! The page scrolls through a hero banner, services, location advantages, a
//! property gallery, rotating client testimonials and a contact form. The
//! navbar highlights whichever section is currently in view.

pub mod app;
pub mod carousel;
pub mod contact;
pub mod content;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod submission;
pub mod ui;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_utils;
