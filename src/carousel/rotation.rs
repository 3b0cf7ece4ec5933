// SPDX-License-Identifier: MPL-2.0
//! Automatic rotation of the testimonial carousel.
//!
//! The timer itself does not own a clock. While it is running, the
//! application subscribes to `iced::time::every(interval)` and feeds each
//! tick to [`RotationTimer::on_tick`]; once stopped, the subscription is
//! dropped and any tick already in flight is ignored.

use super::Carousel;
use crate::domain::ui::RotationInterval;
use std::time::Duration;

/// Advances a carousel once per interval while running.
#[derive(Debug, Clone)]
pub struct RotationTimer {
    carousel: Carousel,
    interval: RotationInterval,
    running: bool,
}

impl RotationTimer {
    /// Creates a stopped timer over `len` slides.
    #[must_use]
    pub fn new(len: usize, interval: RotationInterval) -> Self {
        Self {
            carousel: Carousel::new(len),
            interval,
            running: false,
        }
    }

    /// Starts ticking. Returns `false` if the timer was already running.
    pub fn start(&mut self) -> bool {
        let was_stopped = !self.running;
        self.running = true;
        was_stopped
    }

    /// Stops ticking. Returns `false` if the timer was already stopped.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval.as_duration()
    }

    /// Handles one timer firing.
    ///
    /// Advances the carousel and returns `true` while running; a tick that
    /// arrives after [`stop`](Self::stop) changes nothing.
    pub fn on_tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.carousel.next();
        true
    }

    /// Shows slide `index` directly.
    ///
    /// The rotation keeps its schedule; the next tick advances from here.
    pub fn select(&mut self, index: usize) {
        self.carousel.jump_to(index);
    }

    /// Index of the slide currently shown.
    #[must_use]
    pub fn current(&self) -> usize {
        self.carousel.index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.carousel.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carousel.is_empty()
    }
}
