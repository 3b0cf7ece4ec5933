// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Toasts acknowledge contact form outcomes and report settings problems
//! without blocking the page. At most three are visible; the rest queue.
//!
//! - [`Notification`]: message plus [`Severity`]
//! - [`Manager`]: queue, auto-dismiss timers, diagnostics logging
//! - [`Toast`]: rendering in the bottom-right corner
//!
//! Success and info toasts leave after 3s, warnings after 5s. Errors stay
//! until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
