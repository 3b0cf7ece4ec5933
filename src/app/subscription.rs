// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always routed. The rotation clock only exists while
//! the testimonial timer is running, so stopping the timer drops it; the
//! toast tick only exists while notifications are on screen.

use super::Message;
use crate::carousel::RotationTimer;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Toast auto-dismiss resolution.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window close and resize events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Fires once per rotation interval while the timer runs.
pub fn create_rotation_subscription(timer: &RotationTimer) -> Subscription<Message> {
    if timer.is_running() && timer.len() > 1 {
        time::every(timer.interval()).map(Message::RotationTick)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
