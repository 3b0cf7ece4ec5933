// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Shows the brand, one link per section except the hero, and the
//! "Schedule Visit" button. Below the compact breakpoint the links move into
//! a dropdown opened by a toggle button.

use crate::domain::section::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub brand: &'a str,
    pub active_section: Option<Section>,
    pub compact: bool,
    pub menu_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    LinkPressed(Section),
    ScheduleVisit,
    BrandPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MenuToggled { open: bool },
    ScrollTo(Section),
}

/// Processes a navbar message. Choosing any destination closes the menu.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::MenuToggled { open: *menu_open }
        }
        Message::LinkPressed(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::ScheduleVisit => {
            *menu_open = false;
            Event::ScrollTo(Section::Contact)
        }
        Message::BrandPressed => {
            *menu_open = false;
            Event::ScrollTo(Section::Hero)
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(Text::new(ctx.brand).size(typography::TITLE_MD))
        .on_press(Message::BrandPressed)
        .padding(0)
        .style(styles::button::nav_link(false));

    let mut bar = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let toggle_label = if ctx.menu_open { "\u{2715}" } else { "\u{2630}" };
        bar = bar.push(
            button(Text::new(toggle_label).size(typography::TITLE_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::nav_link(false)),
        );
    } else {
        for section in Section::nav_links() {
            bar = bar.push(nav_link(section, ctx.active_section));
        }
        bar = bar.push(schedule_button());
    }

    let mut content = Column::new()
        .width(Length::Fill)
        .push(Container::new(bar).width(Length::Fill).style(styles::container::navbar));

    if ctx.compact && ctx.menu_open {
        content = content.push(dropdown(ctx.active_section));
    }

    content.into()
}

fn nav_link<'a>(section: Section, active: Option<Section>) -> Element<'a, Message> {
    button(Text::new(section.label()).size(typography::BODY))
        .on_press(Message::LinkPressed(section))
        .padding([spacing::XXS, 0.0])
        .style(styles::button::nav_link(active == Some(section)))
        .into()
}

fn schedule_button<'a>() -> Element<'a, Message> {
    button(Text::new("Schedule Visit").size(typography::BODY))
        .on_press(Message::ScheduleVisit)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .into()
}

fn dropdown<'a>(active: Option<Section>) -> Element<'a, Message> {
    let links = Section::nav_links().fold(
        Column::new().spacing(spacing::SM),
        |column, section| column.push(nav_link(section, active)),
    );

    Container::new(links.push(schedule_button()))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::menu_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_menu_state() {
        let mut open = false;
        assert_eq!(
            update(Message::ToggleMenu, &mut open),
            Event::MenuToggled { open: true }
        );
        assert!(open);
        assert_eq!(
            update(Message::ToggleMenu, &mut open),
            Event::MenuToggled { open: false }
        );
        assert!(!open);
    }

    #[test]
    fn choosing_a_link_closes_menu() {
        let mut open = true;
        let event = update(Message::LinkPressed(Section::Gallery), &mut open);
        assert_eq!(event, Event::ScrollTo(Section::Gallery));
        assert!(!open);
    }

    #[test]
    fn schedule_visit_scrolls_to_contact() {
        let mut open = false;
        assert_eq!(
            update(Message::ScheduleVisit, &mut open),
            Event::ScrollTo(Section::Contact)
        );
    }

    #[test]
    fn brand_scrolls_to_top() {
        let mut open = true;
        assert_eq!(
            update(Message::BrandPressed, &mut open),
            Event::ScrollTo(Section::Hero)
        );
        assert!(!open);
    }
}
