// SPDX-License-Identifier: MPL-2.0
//! Manual gallery carousel: slide, arrows, dots and thumbnails.

use super::{dots, frame, heading, Message, Surface};
use crate::carousel::gallery::THUMBNAIL_COUNT;
use crate::content::SiteContent;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::images::ImageCache;
use crate::ui::layout::{Block, PageLayout};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, svg, Column, Container, Row, Stack, Svg, Text};
use iced::{ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub content: &'a SiteContent,
    pub images: &'a ImageCache,
    pub current: usize,
    pub layout: PageLayout,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = ctx.content;
    let body = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(heading("Property Gallery", Some(content.gallery.blurb.as_str())))
        .push(slide(&ctx))
        .push(dots(
            ctx.images.gallery_len(),
            ctx.current,
            Message::GalleryJump,
        ))
        .push(thumbnails(&ctx));

    frame(ctx.layout, Block::Gallery, Surface::Secondary, body)
}

fn slide<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let image = Svg::new(ctx.images.gallery(ctx.current))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let caption = Container::new(
        Text::new(SiteContent::gallery_caption(ctx.current)).size(typography::TITLE_SM),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::LG])
    .style(styles::container::caption);

    let arrows = Row::new()
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(arrow("\u{2039}", Message::GalleryPrevious))
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(arrow("\u{203a}", Message::GalleryNext));

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(image)
        .push(Container::new(caption).align_bottom(Length::Fill))
        .push(arrows);

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fixed(slide_height(ctx.layout)))
        .clip(true)
        .style(styles::container::image_frame)
        .into()
}

fn slide_height(layout: PageLayout) -> f32 {
    if layout.is_compact() {
        sizing::GALLERY_SLIDE_HEIGHT * 0.6
    } else {
        sizing::GALLERY_SLIDE_HEIGHT
    }
}

fn arrow<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_LG)
            .align_x(Horizontal::Center),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::BUTTON_HEIGHT))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(0)
    .style(styles::button::carousel_arrow)
    .into()
}

fn thumbnails<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.layout.is_compact() {
        return Row::new().into();
    }

    let count = THUMBNAIL_COUNT.min(ctx.images.gallery_len());
    (0..count)
        .fold(Row::new().spacing(spacing::MD), |row, index| {
            let image: Svg<'a> = svg(ctx.images.gallery(index))
                .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .content_fit(ContentFit::Cover);
            row.push(
                button(image)
                    .on_press(Message::GalleryJump(index))
                    .padding(spacing::XXS)
                    .style(styles::button::thumbnail(index == ctx.current)),
            )
        })
        .into()
}
