// SPDX-License-Identifier: MPL-2.0
//! Viewport intersection observer.
//!
//! Regions and the viewport are vertical extents in page coordinates
//! (pixels from the top of the scrollable content). Only the vertical axis
//! matters: every section spans the full page width.

use crate::domain::section::Section;
use crate::domain::ui::VisibilityThreshold;

/// Vertical extent in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Length of the overlap between two spans.
    #[must_use]
    pub fn overlap(&self, other: &Span) -> f32 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }
}

/// The area a section occupies on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub section: Section,
    pub span: Span,
}

impl Region {
    #[must_use]
    pub fn new(section: Section, top: f32, height: f32) -> Self {
        Self {
            section,
            span: Span::new(top, height),
        }
    }

    /// Fraction of this region that lies inside `viewport`, in `0.0..=1.0`.
    #[must_use]
    pub fn visible_fraction(&self, viewport: &Span) -> f32 {
        if self.span.height <= 0.0 {
            return 0.0;
        }
        (self.span.overlap(viewport) / self.span.height).clamp(0.0, 1.0)
    }
}

/// A change in whether a section meets the visibility threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEvent {
    pub section: Section,
    pub is_intersecting: bool,
}

impl IntersectionEvent {
    #[must_use]
    pub fn new(section: Section, is_intersecting: bool) -> Self {
        Self {
            section,
            is_intersecting,
        }
    }
}

#[derive(Debug, Clone)]
struct Observed {
    region: Region,
    /// `None` until the first viewport has been evaluated.
    intersecting: Option<bool>,
}

/// Reports which regions cross the threshold as the viewport moves.
///
/// The first evaluation after [`observe`](Self::observe) emits one event
/// per region. Later evaluations only emit for regions whose state flipped.
/// Events always come out in document order.
#[derive(Debug, Clone, Default)]
pub struct IntersectionObserver {
    observed: Vec<Observed>,
    threshold: VisibilityThreshold,
}

impl IntersectionObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing `regions`, replacing any previous registration.
    pub fn observe(
        &mut self,
        regions: impl IntoIterator<Item = Region>,
        threshold: VisibilityThreshold,
    ) {
        let mut observed: Vec<Observed> = regions
            .into_iter()
            .map(|region| Observed {
                region,
                intersecting: None,
            })
            .collect();
        observed.sort_by(|a, b| a.region.span.top.total_cmp(&b.region.span.top));

        self.observed = observed;
        self.threshold = threshold;
    }

    /// Updates region geometry after a relayout, keeping known states.
    ///
    /// Regions for sections not currently observed are ignored.
    pub fn relayout(&mut self, regions: impl IntoIterator<Item = Region>) {
        for region in regions {
            if let Some(entry) = self
                .observed
                .iter_mut()
                .find(|entry| entry.region.section == region.section)
            {
                entry.region = region;
            }
        }
        self.observed
            .sort_by(|a, b| a.region.span.top.total_cmp(&b.region.span.top));
    }

    /// Releases all regions. Later viewport changes produce no events.
    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        !self.observed.is_empty()
    }

    #[must_use]
    pub fn threshold(&self) -> VisibilityThreshold {
        self.threshold
    }

    /// Evaluates every region against `viewport`.
    pub fn update(&mut self, viewport: Span) -> Vec<IntersectionEvent> {
        let threshold = self.threshold;
        self.observed
            .iter_mut()
            .filter_map(|entry| {
                let now = threshold.is_met_by(entry.region.visible_fraction(&viewport));
                let changed = entry.intersecting != Some(now);
                entry.intersecting = Some(now);
                changed.then(|| IntersectionEvent::new(entry.region.section, now))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn page() -> Vec<Region> {
        vec![
            Region::new(Section::Hero, 0.0, 600.0),
            Region::new(Section::Services, 600.0, 1000.0),
            Region::new(Section::Advantages, 1600.0, 800.0),
        ]
    }

    fn observer() -> IntersectionObserver {
        let mut observer = IntersectionObserver::new();
        observer.observe(page(), VisibilityThreshold::new(0.3));
        observer
    }

    #[test]
    fn visible_fraction_is_relative_to_region() {
        let region = Region::new(Section::Services, 600.0, 1000.0);
        assert_abs_diff_eq!(region.visible_fraction(&Span::new(0.0, 800.0)), 0.2);
        assert_abs_diff_eq!(region.visible_fraction(&Span::new(500.0, 2000.0)), 1.0);
        assert_abs_diff_eq!(region.visible_fraction(&Span::new(2000.0, 100.0)), 0.0);
    }

    #[test]
    fn zero_height_region_is_never_visible() {
        let region = Region::new(Section::Hero, 10.0, 0.0);
        assert_abs_diff_eq!(region.visible_fraction(&Span::new(0.0, 100.0)), 0.0);
    }

    #[test]
    fn first_update_reports_every_region_in_document_order() {
        let mut observer = observer();
        let events = observer.update(Span::new(0.0, 800.0));
        assert_eq!(
            events,
            vec![
                IntersectionEvent::new(Section::Hero, true),
                IntersectionEvent::new(Section::Services, false),
                IntersectionEvent::new(Section::Advantages, false),
            ]
        );
    }

    #[test]
    fn later_updates_report_only_changes() {
        let mut observer = observer();
        observer.update(Span::new(0.0, 800.0));

        assert!(observer.update(Span::new(10.0, 800.0)).is_empty());

        let events = observer.update(Span::new(700.0, 800.0));
        assert_eq!(
            events,
            vec![
                IntersectionEvent::new(Section::Hero, false),
                IntersectionEvent::new(Section::Services, true),
            ]
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut observer = IntersectionObserver::new();
        observer.observe(
            [Region::new(Section::Gallery, 0.0, 1000.0)],
            VisibilityThreshold::new(0.3),
        );
        assert_eq!(
            observer.update(Span::new(700.0, 800.0)),
            vec![IntersectionEvent::new(Section::Gallery, true)]
        );
    }

    #[test]
    fn regions_are_sorted_by_position() {
        let mut observer = IntersectionObserver::new();
        let mut reversed = page();
        reversed.reverse();
        observer.observe(reversed, VisibilityThreshold::default());

        let order: Vec<_> = observer
            .update(Span::new(0.0, 100.0))
            .into_iter()
            .map(|event| event.section)
            .collect();
        assert_eq!(
            order,
            vec![Section::Hero, Section::Services, Section::Advantages]
        );
    }

    #[test]
    fn disconnected_observer_is_silent() {
        let mut observer = observer();
        observer.disconnect();
        assert!(!observer.is_observing());
        assert!(observer.update(Span::new(0.0, 800.0)).is_empty());
    }

    #[test]
    fn relayout_keeps_state_and_reports_flips() {
        let mut observer = observer();
        observer.update(Span::new(0.0, 800.0));

        observer.relayout([Region::new(Section::Hero, 0.0, 1000.0)]);
        assert!(observer.update(Span::new(0.0, 800.0)).is_empty());

        observer.relayout([Region::new(Section::Hero, 900.0, 600.0)]);
        let events = observer.update(Span::new(0.0, 800.0));
        assert!(events.contains(&IntersectionEvent::new(Section::Hero, false)));
    }
}
