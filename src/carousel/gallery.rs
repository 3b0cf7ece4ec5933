// SPDX-License-Identifier: MPL-2.0
//! Manual navigation of the property gallery.

use super::Carousel;

/// Number of leading images that also get a thumbnail under the slide.
pub const THUMBNAIL_COUNT: usize = 4;

/// Next/previous/jump controls over the gallery images.
///
/// The gallery never advances on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    carousel: Carousel,
}

impl GalleryNavigator {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            carousel: Carousel::new(len),
        }
    }

    pub fn next(&mut self) {
        self.carousel.next();
    }

    pub fn previous(&mut self) {
        self.carousel.previous();
    }

    /// Shows image `index`, as picked from a dot indicator or thumbnail.
    pub fn jump_to(&mut self, index: usize) {
        self.carousel.jump_to(index);
    }

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

    /// Indices that get a thumbnail.
    pub fn thumbnails(&self) -> std::ops::Range<usize> {
        0..self.len().min(THUMBNAIL_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_from_last() {
        let mut gallery = GalleryNavigator::new(5);
        gallery.jump_to(4);
        gallery.next();
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn wraps_backward_from_first() {
        let mut gallery = GalleryNavigator::new(5);
        gallery.previous();
        assert_eq!(gallery.current(), 4);
    }

    #[test]
    fn jump_sets_exact_index_from_any_state() {
        for start in 0..5 {
            for target in 0..5 {
                let mut gallery = GalleryNavigator::new(5);
                gallery.jump_to(start);
                gallery.jump_to(target);
                assert_eq!(gallery.current(), target);
            }
        }
    }

    #[test]
    fn thumbnails_cover_first_four_images() {
        assert_eq!(GalleryNavigator::new(5).thumbnails(), 0..4);
        assert_eq!(GalleryNavigator::new(2).thumbnails(), 0..2);
    }
}
