// SPDX-License-Identifier: MPL-2.0
//! Hero banner with headline, calls to action and stats.

use super::{frame, Message, Surface};
use crate::content::SiteContent;
use crate::domain::section::Section;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::layout::{Block, PageLayout};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view(content: &SiteContent, layout: PageLayout) -> Element<'_, Message> {
    let headline_size = if layout.is_compact() {
        typography::TITLE_LG
    } else {
        typography::DISPLAY
    };

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new("Explore Properties").size(typography::BODY))
                .on_press(Message::ScrollTo(Section::Services))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::inverted),
        )
        .push(
            button(Text::new("Contact Us").size(typography::BODY))
                .on_press(Message::ScrollTo(Section::Contact))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline_light),
        );

    let pitch = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(&content.brand.headline).size(headline_size))
        .push(Text::new(&content.brand.tagline).size(typography::BODY_LG))
        .push(actions);

    let body: Element<'_, Message> = if layout.is_compact() {
        Column::new()
            .spacing(spacing::XL)
            .push(pitch)
            .push(stats(content, 2))
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .align_y(Vertical::Center)
            .push(Container::new(pitch).width(Length::FillPortion(3)))
            .push(Container::new(stats(content, 2)).width(Length::FillPortion(2)))
            .into()
    };

    frame(
        layout,
        Block::Hero,
        Surface::Banner,
        Container::new(body).center_y(Length::Fill),
    )
}

/// Stats panel, `columns` figures per row.
fn stats(content: &SiteContent, columns: usize) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::LG);
    for chunk in content.stats.chunks(columns.max(1)) {
        let row = chunk.iter().fold(Row::new().spacing(spacing::LG), |row, stat| {
            row.push(
                Column::new()
                    .width(Length::FillPortion(1))
                    .align_x(Horizontal::Center)
                    .push(Text::new(&stat.value).size(typography::TITLE_LG))
                    .push(Text::new(&stat.label).size(typography::BODY_SM)),
            )
        });
        grid = grid.push(row);
    }

    Container::new(grid)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::glass)
        .into()
}
