// SPDX-License-Identifier: MPL-2.0
//! Brokerage and investment features, then the four service cards.

use super::{card, frame, grid, heading, Message, Surface};
use crate::content::SiteContent;
use crate::ui::design_tokens::spacing;
use crate::ui::layout::{Block, PageLayout};
use iced::widget::Column;
use iced::Element;

pub fn view(content: &SiteContent, layout: PageLayout) -> Element<'_, Message> {
    let features = content
        .features
        .iter()
        .map(|feature| card(&feature.title, &feature.body))
        .collect();

    let services = content
        .services
        .iter()
        .map(|service| card(&service.title, &service.description))
        .collect();

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(
            "Our Services",
            Some("Comprehensive real estate solutions tailored to your needs"),
        ))
        .push(grid(features, 2, layout))
        .push(grid(services, 4, layout));

    frame(layout, Block::Services, Surface::Primary, body)
}
