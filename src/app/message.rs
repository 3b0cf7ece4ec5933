// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::SiteContent;
use crate::submission::{Receipt, SubmissionError};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use crate::ui::theming::ThemeMode;
use iced::{window, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded through a single update entry point.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(sections::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    WindowResized(Size),
    /// The testimonial rotation interval elapsed.
    RotationTick(Instant),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
    SubmissionFinished(Result<Receipt, SubmissionError>),
    /// Window close was requested; tear down before exiting.
    WindowCloseRequested(window::Id),
}

/// Runtime inputs resolved by `main` before the window opens.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Validated page content.
    pub content: SiteContent,
    /// Overrides `[general] theme_mode` for this run.
    pub theme: Option<ThemeMode>,
    /// Where to write the diagnostics report on exit.
    pub diagnostics_path: Option<PathBuf>,
}
