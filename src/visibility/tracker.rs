// SPDX-License-Identifier: MPL-2.0
//! Active-section holder fed by the intersection observer.

use super::observer::{IntersectionEvent, IntersectionObserver, Region, Span};
use crate::domain::section::Section;
use crate::domain::ui::VisibilityThreshold;

/// Tracks which section the visitor is looking at.
///
/// Within one batch of events the last intersecting section wins, and
/// since batches are in document order that is the lowest section meeting
/// the threshold. A section leaving the viewport never clears the active
/// section on its own; only another section entering replaces it.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    observer: IntersectionObserver,
    active: Option<Section>,
}

impl SectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the section regions. The active section is kept.
    pub fn observe(&mut self, regions: Vec<Region>, threshold: VisibilityThreshold) {
        self.observer.observe(regions, threshold);
    }

    /// Replaces region geometry after the page was laid out again.
    pub fn relayout(&mut self, regions: Vec<Region>) {
        self.observer.relayout(regions);
    }

    /// Stops tracking. The last active section stays highlighted.
    pub fn disconnect(&mut self) {
        self.observer.disconnect();
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observer.is_observing()
    }

    /// Feeds a new viewport and returns the active section if it changed.
    pub fn on_viewport(&mut self, viewport: Span) -> Option<Section> {
        let events = self.observer.update(viewport);
        let before = self.active;
        self.apply(&events);
        (self.active != before).then_some(self.active).flatten()
    }

    /// Applies a batch of events in order.
    pub fn apply(&mut self, events: &[IntersectionEvent]) {
        for event in events {
            if event.is_intersecting {
                self.active = Some(event.section);
            }
        }
    }

    #[must_use]
    pub fn active_section(&self) -> Option<Section> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_active_section() {
        assert_eq!(SectionTracker::new().active_section(), None);
    }

    #[test]
    fn consecutive_batches_move_the_active_section() {
        let mut tracker = SectionTracker::new();
        tracker.apply(&[IntersectionEvent::new(Section::Services, true)]);
        tracker.apply(&[IntersectionEvent::new(Section::Advantages, true)]);
        assert_eq!(tracker.active_section(), Some(Section::Advantages));
    }

    #[test]
    fn last_intersecting_event_in_a_batch_wins() {
        let mut tracker = SectionTracker::new();
        tracker.apply(&[
            IntersectionEvent::new(Section::Gallery, true),
            IntersectionEvent::new(Section::Testimonials, true),
            IntersectionEvent::new(Section::Contact, false),
        ]);
        assert_eq!(tracker.active_section(), Some(Section::Testimonials));
    }

    #[test]
    fn leaving_events_do_not_clear_active_section() {
        let mut tracker = SectionTracker::new();
        tracker.apply(&[IntersectionEvent::new(Section::Gallery, true)]);
        tracker.apply(&[IntersectionEvent::new(Section::Gallery, false)]);
        assert_eq!(tracker.active_section(), Some(Section::Gallery));
    }

    #[test]
    fn on_viewport_reports_changes_only() {
        let mut tracker = SectionTracker::new();
        tracker.observe(
            vec![
                Region::new(Section::Hero, 0.0, 600.0),
                Region::new(Section::Services, 600.0, 1000.0),
            ],
            VisibilityThreshold::new(0.3),
        );

        assert_eq!(tracker.on_viewport(Span::new(0.0, 800.0)), Some(Section::Hero));
        assert_eq!(tracker.on_viewport(Span::new(20.0, 800.0)), None);
        assert_eq!(
            tracker.on_viewport(Span::new(900.0, 800.0)),
            Some(Section::Services)
        );
    }

    #[test]
    fn disconnected_tracker_keeps_last_section() {
        let mut tracker = SectionTracker::new();
        tracker.observe(
            vec![Region::new(Section::Contact, 0.0, 500.0)],
            VisibilityThreshold::default(),
        );
        tracker.on_viewport(Span::new(0.0, 500.0));
        tracker.disconnect();

        assert_eq!(tracker.on_viewport(Span::new(5000.0, 500.0)), None);
        assert_eq!(tracker.active_section(), Some(Section::Contact));
    }
}
