// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above a single scrollable holding every block in
//! document order. Toasts are stacked over the scrollable.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::sections::{self, contact, footer, gallery, testimonials};
use chrono::Datelike;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        brand: &app.content.brand.name,
        active_section: app.tracker.active_section(),
        compact: app.layout.is_compact(),
        menu_open: app.menu_open,
    })
    .map(Message::Navbar);

    let page = Scrollable::new(page(app).map(Message::Page))
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        })
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(&app.notifications).map(Message::Notification);

    let body = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts);

    Container::new(
        Column::new()
            .push(navbar_view)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// All blocks, top to bottom.
fn page(app: &App) -> Element<'_, sections::Message> {
    let layout = app.layout;
    let content = &app.content;

    Column::new()
        .width(Length::Fill)
        .push(sections::hero::view(content, layout))
        .push(sections::services::view(content, layout))
        .push(sections::excellence::view(content, layout))
        .push(sections::advantages::view(content, layout))
        .push(gallery::view(gallery::ViewContext {
            content,
            images: &app.images,
            current: app.gallery.current(),
            layout,
        }))
        .push(testimonials::view(testimonials::ViewContext {
            content,
            images: &app.images,
            current: app.testimonials.current(),
            layout,
        }))
        .push(contact::view(contact::ViewContext {
            content,
            data: app.form.data(),
            submitting: app.form.is_submitting(),
            layout,
        }))
        .push(footer::view(footer::ViewContext {
            content,
            layout,
            year: chrono::Local::now().year(),
        }))
        .into()
}
