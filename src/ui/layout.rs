// SPDX-License-Identifier: MPL-2.0
//! Vertical geometry of the page.
//!
//! Every block is rendered at a fixed height, so section regions are known
//! without measuring widgets. The compact layout stacks cards in a single
//! column and uses taller blocks.

use crate::domain::section::Section;
use crate::ui::design_tokens::sizing;
use crate::visibility::{Region, Span};

/// A horizontal band of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Hero,
    Services,
    /// Trust, Honesty and Integrity. Not a navigation target.
    Excellence,
    Advantages,
    Gallery,
    Testimonials,
    Contact,
    Footer,
}

impl Block {
    pub const ALL: [Block; 8] = [
        Block::Hero,
        Block::Services,
        Block::Excellence,
        Block::Advantages,
        Block::Gallery,
        Block::Testimonials,
        Block::Contact,
        Block::Footer,
    ];

    /// The tracked section this block renders, if any.
    #[must_use]
    pub fn section(self) -> Option<Section> {
        match self {
            Block::Hero => Some(Section::Hero),
            Block::Services => Some(Section::Services),
            Block::Advantages => Some(Section::Advantages),
            Block::Gallery => Some(Section::Gallery),
            Block::Testimonials => Some(Section::Testimonials),
            Block::Contact => Some(Section::Contact),
            Block::Excellence | Block::Footer => None,
        }
    }

    #[must_use]
    pub fn height(self, compact: bool) -> f32 {
        match (self, compact) {
            (Block::Hero, false) => 620.0,
            (Block::Hero, true) => 780.0,
            (Block::Services, false) => 980.0,
            (Block::Services, true) => 1_900.0,
            (Block::Excellence, false) => 520.0,
            (Block::Excellence, true) => 900.0,
            (Block::Advantages, false) => 760.0,
            (Block::Advantages, true) => 1_320.0,
            (Block::Gallery, false) => 900.0,
            (Block::Gallery, true) => 820.0,
            (Block::Testimonials, false) => 560.0,
            (Block::Testimonials, true) => 640.0,
            (Block::Contact, false) => 900.0,
            (Block::Contact, true) => 1_560.0,
            (Block::Footer, false) => 320.0,
            (Block::Footer, true) => 720.0,
        }
    }
}

/// Resolved geometry for one window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageLayout {
    compact: bool,
}

impl PageLayout {
    #[must_use]
    pub fn for_width(window_width: f32) -> Self {
        Self {
            compact: window_width < sizing::COMPACT_BREAKPOINT,
        }
    }

    #[must_use]
    pub fn is_compact(self) -> bool {
        self.compact
    }

    #[must_use]
    pub fn height(self, block: Block) -> f32 {
        block.height(self.compact)
    }

    /// Offset of `block` from the top of the scrollable content.
    #[must_use]
    pub fn top_of(self, block: Block) -> f32 {
        Block::ALL
            .iter()
            .take_while(|&&b| b != block)
            .map(|&b| self.height(b))
            .sum()
    }

    #[must_use]
    pub fn content_height(self) -> f32 {
        Block::ALL.iter().map(|&b| self.height(b)).sum()
    }

    /// One region per tracked section.
    #[must_use]
    pub fn regions(self) -> Vec<Region> {
        Block::ALL
            .iter()
            .filter_map(|&block| {
                block
                    .section()
                    .map(|section| Region::new(section, self.top_of(block), self.height(block)))
            })
            .collect()
    }

    #[must_use]
    pub fn top_of_section(self, section: Section) -> f32 {
        Block::ALL
            .iter()
            .find(|b| b.section() == Some(section))
            .map_or(0.0, |&b| self.top_of(b))
    }

    /// Relative scroll position (0..=1) that brings `section` to the top,
    /// given the visible height of the scrollable.
    #[must_use]
    pub fn snap_ratio(self, section: Section, viewport_height: f32) -> f32 {
        let scrollable = self.content_height() - viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.top_of_section(section) / scrollable).clamp(0.0, 1.0)
    }

    /// The scrollable's visible band, given its offset and the window height.
    #[must_use]
    pub fn viewport(self, scroll_offset: f32, window_height: f32) -> Span {
        Span::new(
            scroll_offset,
            (window_height - sizing::NAVBAR_HEIGHT).max(0.0),
        )
    }
}
