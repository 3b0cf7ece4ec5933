// SPDX-License-Identifier: MPL-2.0
//! Footer: about blurb, quick links, property types, copyright.

use super::{frame, Message, Surface};
use crate::content::SiteContent;
use crate::domain::inquiry::PropertyType;
use crate::domain::section::Section;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::layout::{Block, PageLayout};
use crate::ui::styles;
use iced::widget::{button, rule, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub content: &'a SiteContent,
    pub layout: PageLayout,
    /// Year shown in the copyright line.
    pub year: i32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let about = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(&ctx.content.brand.name).size(typography::TITLE_MD))
        .push(Text::new(&ctx.content.brand.about).size(typography::BODY_SM));

    let links = Section::ALL.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new("Quick Links").size(typography::TITLE_SM)),
        |column, &section| {
            column.push(
                button(Text::new(section.label()).size(typography::BODY_SM))
                    .on_press(Message::ScrollTo(section))
                    .padding([spacing::XXS, 0.0])
                    .style(styles::button::footer_link),
            )
        },
    );

    let properties = PropertyType::ALL.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new("Properties").size(typography::TITLE_SM)),
        |column, kind| column.push(Text::new(kind.label()).size(typography::BODY_SM)),
    );

    let columns: Element<'a, Message> = if ctx.layout.is_compact() {
        Column::new()
            .spacing(spacing::LG)
            .push(about)
            .push(links)
            .push(properties)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .push(about.width(Length::FillPortion(2)))
            .push(links.width(Length::FillPortion(1)))
            .push(properties.width(Length::FillPortion(1)))
            .into()
    };

    let body = Column::new()
        .spacing(spacing::LG)
        .push(columns)
        .push(rule::horizontal(1))
        .push(Text::new(copyright(&ctx.content.brand.name, ctx.year)).size(typography::CAPTION));

    frame(ctx.layout, Block::Footer, Surface::Footer, body)
}

#[must_use]
pub fn copyright(brand: &str, year: i32) -> String {
    format!("\u{00a9} {year} {brand}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_includes_year_and_brand() {
        assert_eq!(
            copyright("Yadadri 360°", 2026),
            "\u{00a9} 2026 Yadadri 360°. All rights reserved."
        );
    }
}
