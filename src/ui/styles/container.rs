// SPDX-License-Identifier: MPL-2.0
//! Container styles for page sections and cards.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Picks the color scheme matching the active iced theme.
#[must_use]
pub fn scheme_for(theme: &Theme) -> ColorScheme {
    let bg = theme.palette().background;
    if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

/// Fixed top bar, slightly translucent.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..colors.surface_primary
        })),
        text_color: Some(colors.text_primary),
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Dropdown of the compact navigation menu.
pub fn menu_panel(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Page section on the primary surface.
pub fn section(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..container::Style::default()
    }
}

/// Alternating page section on the secondary surface.
pub fn section_alt(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..container::Style::default()
    }
}

/// Hero and call-to-action banners.
pub fn banner(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(colors.banner_background)),
        text_color: Some(colors.banner_text),
        ..container::Style::default()
    }
}

/// Translucent panel on top of a banner (hero stats).
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Raised content card.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(colors.text_primary),
        ..container::Style::default()
    }
}

/// Brand-tinted card ("Schedule a Site Visit", map card).
pub fn tinted_card(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_tint)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        text_color: Some(colors.text_primary),
        ..container::Style::default()
    }
}

/// Round badge holding a card glyph.
pub fn icon_badge(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Rounded frame that clips gallery images.
pub fn image_frame(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_tertiary)),
        border: Border {
            radius: radius::XL.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        ..container::Style::default()
    }
}

/// Caption strip at the bottom of the gallery slide.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Dark footer band, same in both themes.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_300),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_follows_theme_brightness() {
        assert_eq!(
            scheme_for(&Theme::Dark).surface_primary,
            ColorScheme::dark().surface_primary
        );
        assert_eq!(
            scheme_for(&Theme::Light).surface_primary,
            ColorScheme::light().surface_primary
        );
    }

    #[test]
    fn footer_is_dark_in_light_theme() {
        let style = footer(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_900)));
    }
}
