// SPDX-License-Identifier: MPL-2.0
//! Page sections reachable through in-page anchors.

use std::fmt;

/// A tracked section of the page.
///
/// Each section owns exactly one viewport region and a stable anchor id.
/// The declaration order is the document order, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    Services,
    Advantages,
    Gallery,
    Testimonials,
    Contact,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Services,
        Section::Advantages,
        Section::Gallery,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Stable identifier of the section's region.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Services => "services",
            Section::Advantages => "advantages",
            Section::Gallery => "gallery",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// In-page anchor, e.g. `#services`.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "#hero",
            Section::Services => "#services",
            Section::Advantages => "#advantages",
            Section::Gallery => "#gallery",
            Section::Testimonials => "#testimonials",
            Section::Contact => "#contact",
        }
    }

    /// Navigation link label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Services => "Services",
            Section::Advantages => "Advantages",
            Section::Gallery => "Gallery",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }

    /// Whether the section gets a link in the navigation bar.
    ///
    /// The hero is reached through the brand title instead.
    #[must_use]
    pub fn is_nav_link(self) -> bool {
        self != Section::Hero
    }

    /// Looks a section up by its anchor (with or without the leading `#`).
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Sections shown as links in the navigation bar, in document order.
    pub fn nav_links() -> impl Iterator<Item = Section> {
        Self::ALL.into_iter().filter(|section| section.is_nav_link())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
