// SPDX-License-Identifier: MPL-2.0
//! Wrapping carousels over fixed-length lists.
//!
//! [`Carousel`] is the shared index arithmetic. [`RotationTimer`] drives the
//! testimonial carousel from a periodic tick and [`GalleryNavigator`]
//! exposes the manual controls of the gallery.

pub mod gallery;
pub mod rotation;

pub use gallery::GalleryNavigator;
pub use rotation::RotationTimer;

/// Index into a list of `len` slides that wraps at both ends.
///
/// The index is always `< len` when `len > 0`. A carousel over an empty
/// list stays at index 0 and ignores every movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Creates a carousel showing the first of `len` slides.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advances to the next slide, wrapping to the first after the last.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Goes back one slide, wrapping to the last before the first.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Shows slide `index`.
    ///
    /// `index` must be `< len`. Out-of-range values trip a debug assertion
    /// and are otherwise ignored.
    pub fn jump_to(&mut self, index: usize) {
        debug_assert!(
            index < self.len,
            "carousel index {} out of range for {} slides",
            index,
            self.len
        );
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_carousel_starts_at_zero() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.len(), 3);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn previous_then_next_is_identity_everywhere() {
        for len in 1..=6 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.jump_to(start);

                carousel.previous();
                carousel.next();
                assert_eq!(carousel.index(), start);

                carousel.next();
                carousel.previous();
                assert_eq!(carousel.index(), start);
            }
        }
    }

    #[test]
    fn single_slide_never_moves() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_carousel_ignores_movement() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn jump_out_of_range_asserts_in_debug() {
        Carousel::new(3).jump_to(3);
    }
}
