// SPDX-License-Identifier: MPL-2.0
//! Location advantages and the map card.

use super::{card, frame, grid, heading, secondary_text, Message, Surface};
use crate::content::SiteContent;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::layout::{Block, PageLayout};
use crate::ui::styles;
use iced::widget::{text_input, Column, Container, Text};
use iced::{Element, Length};

pub fn view(content: &SiteContent, layout: PageLayout) -> Element<'_, Message> {
    let advantages = content
        .advantages
        .iter()
        .map(|advantage| card(&advantage.title, &advantage.body))
        .collect();

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(
            "Why Choose Yadadri?",
            Some("A growing destination with spiritual significance and modern amenities"),
        ))
        .push(grid(advantages, 3, layout))
        .push(map_card(content));

    frame(layout, Block::Advantages, Surface::Primary, body)
}

/// Address and map link. The link is shown in a read-only field so it can
/// be selected and copied.
fn map_card(content: &SiteContent) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(&content.map.title).size(typography::TITLE_SM))
            .push(
                Text::new(&content.contact.address)
                    .size(typography::BODY)
                    .style(secondary_text),
            )
            .push(text_input("", &content.map.url).size(typography::BODY_SM)),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::tinted_card)
    .into()
}
