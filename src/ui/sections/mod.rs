// SPDX-License-Identifier: MPL-2.0
//! Page sections, top to bottom.
//!
//! Each section renders into a fixed-height band sized by
//! [`PageLayout`](crate::ui::layout::PageLayout) and reports interactions as
//! a shared [`Message`]. Sections hold no state; the application passes
//! the current carousel indices and form data down on every view.

pub mod advantages;
pub mod contact;
pub mod excellence;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod services;
pub mod testimonials;

use crate::domain::inquiry::{FormField, PropertyType};
use crate::domain::section::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::{Block, PageLayout};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Interactions raised by any section.
#[derive(Debug, Clone)]
pub enum Message {
    ScrollTo(Section),
    GalleryNext,
    GalleryPrevious,
    GalleryJump(usize),
    SelectTestimonial(usize),
    FieldChanged(FormField, String),
    PropertyTypeSelected(PropertyType),
    Submit,
}

/// Background of a section band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Primary,
    Secondary,
    Banner,
    Footer,
}

impl Surface {
    fn style(self) -> fn(&Theme) -> container::Style {
        match self {
            Surface::Primary => styles::container::section,
            Surface::Secondary => styles::container::section_alt,
            Surface::Banner => styles::container::banner,
            Surface::Footer => styles::container::footer,
        }
    }
}

/// Wraps section content in its fixed-height, clipped band.
pub fn frame<'a>(
    layout: PageLayout,
    block: Block,
    surface: Surface,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let padding = if layout.is_compact() {
        [spacing::XL, spacing::MD]
    } else {
        [spacing::XXXL, spacing::LG]
    };

    let inner = Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding(padding);

    Container::new(inner)
        .center_x(Length::Fill)
        .height(Length::Fixed(layout.height(block)))
        .clip(true)
        .style(surface.style())
        .into()
}

/// Centered section title with an optional lead paragraph.
pub fn heading<'a>(title: &'a str, lead: Option<&'a str>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_LG));

    if let Some(lead) = lead {
        column = column.push(
            Text::new(lead)
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center)
                .style(secondary_text),
        );
    }

    column.into()
}

/// Lays items out `columns` per row; compact layouts use one column.
pub fn grid<'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
    layout: PageLayout,
) -> Element<'a, Message> {
    let columns = if layout.is_compact() { 1 } else { columns.max(1) };
    let mut rows = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
    let mut in_row = 0;

    for item in items {
        row = row.push(Container::new(item).width(Length::FillPortion(1)));
        in_row += 1;
        if in_row == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG).width(Length::Fill);
            in_row = 0;
        }
    }
    if in_row > 0 {
        rows = rows.push(row);
    }

    rows.into()
}

/// Carousel indicator: one dot per slide, the current one filled.
pub fn dots<'a>(
    len: usize,
    current: usize,
    on_press: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    (0..len)
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                button(Text::new(""))
                    .on_press(on_press(index))
                    .width(Length::Fixed(sizing::DOT))
                    .height(Length::Fixed(sizing::DOT))
                    .padding(0)
                    .style(styles::button::dot(index == current)),
            )
        })
        .into()
}

/// Card with a badge showing the title's initial.
pub fn card<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    let badge = Container::new(Text::new(initial(title)).size(typography::TITLE_MD))
        .center_x(Length::Fixed(sizing::ICON_BADGE))
        .center_y(Length::Fixed(sizing::ICON_BADGE))
        .style(styles::container::icon_badge);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(badge)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(Text::new(body).size(typography::BODY).style(secondary_text)),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

/// First alphanumeric character of `title`, uppercased.
#[must_use]
pub fn initial(title: &str) -> String {
    title
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Muted text color for leads and card bodies.
pub fn secondary_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(styles::container::scheme_for(theme).text_secondary),
    }
}
