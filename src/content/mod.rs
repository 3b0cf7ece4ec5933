// SPDX-License-Identifier: MPL-2.0
//! Static page content.
//!
//! Everything the page displays (testimonials, gallery, services, contact
//! details) comes from `assets/content/site.toml`, embedded at compile time
//! and validated once at startup by [`SiteContent::load`].

pub mod assets;

pub use assets::AssetRef;

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Highest star rating a testimonial can carry.
pub const MAX_RATING: u8 = 5;

/// Problems found in the embedded site fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The fixture file is not embedded.
    Missing(&'static str),
    /// The fixture is not valid UTF-8 TOML of the expected shape.
    Parse(String),
    /// A list that the page cycles through is empty.
    Empty(&'static str),
    DuplicateTestimonialId(u32),
    RatingOutOfRange { id: u32, rating: u8 },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Missing(path) => write!(f, "embedded file `{}` not found", path),
            ContentError::Parse(e) => write!(f, "invalid site fixture: {}", e),
            ContentError::Empty(list) => write!(f, "fixture list `{}` is empty", list),
            ContentError::DuplicateTestimonialId(id) => {
                write!(f, "testimonial id {} is used more than once", id)
            }
            ContentError::RatingOutOfRange { id, rating } => write!(
                f,
                "testimonial {} has rating {} (maximum is {})",
                id, rating, MAX_RATING
            ),
        }
    }
}

impl std::error::Error for ContentError {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: String,
}

/// A headline figure shown under the hero ("500+ Properties").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Titled paragraph used by feature, value and advantage cards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MapLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Gallery {
    pub blurb: String,
    pub images: Vec<AssetRef>,
}

/// A client quote shown in the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub avatar: AssetRef,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactDetails {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: Vec<String>,
}

/// The whole page's static content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub stats: Vec<Stat>,
    pub features: Vec<Card>,
    pub services: Vec<Service>,
    pub values: Vec<Card>,
    pub advantages: Vec<Card>,
    pub map: MapLink,
    pub gallery: Gallery,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactDetails,
}

impl SiteContent {
    /// Loads and validates the embedded fixture.
    pub fn load() -> Result<Self, ContentError> {
        let bytes = assets::read(assets::SITE_FIXTURE)
            .ok_or(ContentError::Missing(assets::SITE_FIXTURE))?;
        let text =
            std::str::from_utf8(&bytes).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_toml(text)
    }

    /// Parses and validates fixture text.
    pub fn from_toml(text: &str) -> Result<Self, ContentError> {
        let content: SiteContent =
            toml::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.testimonials.is_empty() {
            return Err(ContentError::Empty("testimonials"));
        }
        if self.gallery.images.is_empty() {
            return Err(ContentError::Empty("gallery.images"));
        }
        if self.services.is_empty() {
            return Err(ContentError::Empty("services"));
        }

        let mut seen = HashSet::new();
        for testimonial in &self.testimonials {
            if !seen.insert(testimonial.id) {
                return Err(ContentError::DuplicateTestimonialId(testimonial.id));
            }
            if testimonial.rating > MAX_RATING {
                return Err(ContentError::RatingOutOfRange {
                    id: testimonial.id,
                    rating: testimonial.rating,
                });
            }
        }
        Ok(())
    }

    /// Caption of gallery slide `index` ("Premium Property 1" for index 0).
    #[must_use]
    pub fn gallery_caption(index: usize) -> String {
        format!("Premium Property {}", index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> SiteContent {
        SiteContent::load().expect("bundled fixture should be valid")
    }

    #[test]
    fn bundled_fixture_has_expected_shape() {
        let content = bundled();
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.gallery.images.len(), 5);
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.values.len(), 3);
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.contact.phone, "+91 9052362639");
    }

    #[test]
    fn bundled_testimonials_are_in_order() {
        let names: Vec<_> = bundled()
            .testimonials
            .iter()
            .map(|t| t.name.clone())
            .collect();
        assert_eq!(names, ["Rajesh Kumar", "Priya Sharma", "Venkat Reddy"]);
    }

    #[test]
    fn bundled_images_are_embedded() {
        let content = bundled();
        for image in &content.gallery.images {
            assert!(image.exists(), "{} is not embedded", image);
        }
        for testimonial in &content.testimonials {
            assert!(testimonial.avatar.exists());
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let text = fixture_with_testimonials(
            r#"
            [[testimonials]]
            id = 7
            name = "A"
            role = "Buyer"
            content = "Good"
            avatar = "images/avatar.svg"
            rating = 5

            [[testimonials]]
            id = 7
            name = "B"
            role = "Seller"
            content = "Fine"
            avatar = "images/avatar.svg"
            rating = 3
            "#,
        );
        assert_eq!(
            SiteContent::from_toml(&text),
            Err(ContentError::DuplicateTestimonialId(7))
        );
    }

    #[test]
    fn rating_above_five_is_rejected() {
        let text = fixture_with_testimonials(
            r#"
            [[testimonials]]
            id = 1
            name = "A"
            role = "Buyer"
            content = "Great"
            avatar = "images/avatar.svg"
            rating = 6
            "#,
        );
        assert_eq!(
            SiteContent::from_toml(&text),
            Err(ContentError::RatingOutOfRange { id: 1, rating: 6 })
        );
    }

    #[test]
    fn empty_testimonials_are_rejected() {
        let text = fixture_with_testimonials("testimonials = []");
        assert_eq!(
            SiteContent::from_toml(&text),
            Err(ContentError::Empty("testimonials"))
        );
    }

    #[test]
    fn gallery_caption_is_one_based() {
        assert_eq!(SiteContent::gallery_caption(0), "Premium Property 1");
        assert_eq!(SiteContent::gallery_caption(4), "Premium Property 5");
    }

    /// Minimal valid fixture with the given testimonials block.
    ///
    /// The testimonials come first so that a bare `testimonials = []` key
    /// lands at the top level rather than inside a table.
    fn fixture_with_testimonials(testimonials: &str) -> String {
        format!(
            r#"
            stats = []
            features = []
            values = []
            advantages = []
            {testimonials}

            [brand]
            name = "Test"
            headline = "Headline"
            tagline = "Tagline"
            about = "About"

            [[services]]
            title = "Open Plots"
            description = "Plots"

            [map]
            title = "Map"
            url = "https://example.invalid"

            [gallery]
            blurb = "Blurb"
            images = ["images/property-1.svg"]

            [contact]
            address = "Address"
            phone = "0"
            email = "a@b.c"
            hours = []
            "#
        )
    }
}
