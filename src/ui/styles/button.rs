// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button ("Schedule Visit", "Send Message").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, edge, drop) = match status {
        button::Status::Hovered => (palette::PRIMARY_700, palette::PRIMARY_800, shadow::MD),
        button::Status::Disabled => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_600
            },
            palette::PRIMARY_600,
            shadow::NONE,
        ),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_600, palette::PRIMARY_700, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: drop,
        snap: true,
    }
}

/// Outlined button on the hero banner ("Contact Us").
pub fn outline_light(_theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: fill,
        text_color: WHITE,
        border: Border {
            color: WHITE,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Light button on the hero banner ("Explore Properties").
pub fn inverted(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_100,
        button::Status::Active | button::Status::Disabled => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::PRIMARY_700,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Text-only navigation link; `active` marks the section in view.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base.text;
        let text_color = match status {
            _ if active => palette::PRIMARY_600,
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
            button::Status::Active | button::Status::Disabled => base,
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    palette::PRIMARY_600
                } else {
                    Color::TRANSPARENT
                },
                width: if active { border::WIDTH_MD } else { 0.0 },
                radius: radius::NONE.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round carousel arrow overlaid on the gallery slide.
pub fn carousel_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_HOVER,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: palette::PRIMARY_700,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Carousel position indicator.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::PRIMARY_600
        } else if matches!(status, button::Status::Hovered) {
            palette::PRIMARY_300
        } else {
            palette::GRAY_300
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Gallery thumbnail frame; the current slide gets a brand border.
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let edge = match status {
            _ if active => palette::PRIMARY_600,
            button::Status::Hovered => palette::PRIMARY_300,
            _ => Color::TRANSPARENT,
        };

        button::Style {
            background: None,
            text_color: WHITE,
            border: Border {
                color: edge,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless link in the footer.
pub fn footer_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => WHITE,
        button::Status::Active | button::Status::Disabled => palette::GRAY_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
