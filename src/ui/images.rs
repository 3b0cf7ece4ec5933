// SPDX-License-Identifier: MPL-2.0
//! SVG handles for the embedded gallery and avatar images.
//!
//! Handles are built once at startup so the view never touches the asset
//! store. Missing assets render the placeholder.

use crate::content::{assets, AssetRef, SiteContent};
use iced::widget::svg;

#[derive(Debug, Clone)]
pub struct ImageCache {
    gallery: Vec<svg::Handle>,
    avatars: Vec<svg::Handle>,
    placeholder: svg::Handle,
}

impl ImageCache {
    #[must_use]
    pub fn from_content(content: &SiteContent) -> Self {
        Self {
            gallery: content.gallery.images.iter().map(handle_for).collect(),
            avatars: content
                .testimonials
                .iter()
                .map(|testimonial| handle_for(&testimonial.avatar))
                .collect(),
            placeholder: handle_for(&AssetRef::new(assets::PLACEHOLDER_IMAGE)),
        }
    }

    #[must_use]
    pub fn gallery(&self, index: usize) -> svg::Handle {
        self.gallery
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.placeholder.clone())
    }

    /// Avatar of the testimonial at `index`.
    #[must_use]
    pub fn avatar(&self, index: usize) -> svg::Handle {
        self.avatars
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.placeholder.clone())
    }

    #[must_use]
    pub fn gallery_len(&self) -> usize {
        self.gallery.len()
    }
}

fn handle_for(image: &AssetRef) -> svg::Handle {
    svg::Handle::from_memory(assets::image_bytes(image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_handle_per_fixture_image() {
        let content = SiteContent::load().expect("bundled content is valid");
        let cache = ImageCache::from_content(&content);
        assert_eq!(cache.gallery_len(), content.gallery.images.len());
        assert_eq!(cache.avatars.len(), content.testimonials.len());
    }

    #[test]
    fn out_of_range_index_still_yields_a_handle() {
        let content = SiteContent::load().expect("bundled content is valid");
        let cache = ImageCache::from_content(&content);
        let _ = cache.gallery(99);
        let _ = cache.avatar(99);
    }
}
