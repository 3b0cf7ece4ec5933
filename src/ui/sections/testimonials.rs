// SPDX-License-Identifier: MPL-2.0
//! Auto-rotating testimonial carousel.

use super::{dots, frame, heading, secondary_text, Message, Surface};
use crate::content::{SiteContent, Testimonial, MAX_RATING};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::images::ImageCache;
use crate::ui::layout::{Block, PageLayout};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Row, Svg, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub content: &'a SiteContent,
    pub images: &'a ImageCache,
    pub current: usize,
    pub layout: PageLayout,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading(
            "What Our Clients Say",
            Some("Hear from the families and investors we have worked with"),
        ));

    if let Some(testimonial) = ctx.content.testimonials.get(ctx.current) {
        body = body.push(slide(testimonial, ctx.images, ctx.current));
    }
    body = body.push(dots(
        ctx.content.testimonials.len(),
        ctx.current,
        Message::SelectTestimonial,
    ));

    frame(ctx.layout, Block::Testimonials, Surface::Primary, body)
}

fn slide<'a>(
    testimonial: &'a Testimonial,
    images: &ImageCache,
    index: usize,
) -> Element<'a, Message> {
    let avatar = Svg::new(images.avatar(index))
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR));

    let rating = star_states(testimonial.rating)
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, filled| {
            let color = if filled { palette::STAR } else { palette::GRAY_300 };
            row.push(
                Text::new("\u{2605}")
                    .size(sizing::STAR)
                    .style(move |_theme: &iced::Theme| text::Style { color: Some(color) }),
            )
        });

    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(avatar)
        .push(Text::new(&testimonial.name).size(typography::TITLE_SM))
        .push(
            Text::new(&testimonial.role)
                .size(typography::BODY_SM)
                .style(secondary_text),
        )
        .push(rating)
        .push(
            Text::new(format!("\u{201c}{}\u{201d}", testimonial.content))
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center),
        );

    Container::new(column)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH * 0.66)
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}

/// Filled state of each star: the first `rating` are filled.
#[must_use]
pub fn star_states(rating: u8) -> Vec<bool> {
    (0..MAX_RATING).map(|i| i < rating).collect()
}
