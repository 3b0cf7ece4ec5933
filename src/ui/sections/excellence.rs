// SPDX-License-Identifier: MPL-2.0
//! Company values. Rendered between services and advantages but not
//! tracked for navigation.

use super::{card, frame, grid, heading, Message, Surface};
use crate::content::SiteContent;
use crate::ui::design_tokens::spacing;
use crate::ui::layout::{Block, PageLayout};
use iced::widget::Column;
use iced::Element;

pub fn view(content: &SiteContent, layout: PageLayout) -> Element<'_, Message> {
    let values = content
        .values
        .iter()
        .map(|value| card(&value.title, &value.body))
        .collect();

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(
            "Our Commitment to Excellence",
            Some("The values that guide every transaction"),
        ))
        .push(grid(values, 3, layout));

    frame(layout, Block::Excellence, Surface::Secondary, body)
}
