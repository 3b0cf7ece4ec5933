// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub brand_tint: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Banner colors (hero, call-to-action panels)
    pub banner_background: Color,
    pub banner_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::PRIMARY_100,

            text_primary: palette::GRAY_800,
            text_secondary: palette::GRAY_600,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_700,
            brand_tint: palette::PRIMARY_100,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            banner_background: palette::PRIMARY_700,
            banner_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_tertiary: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,
            brand_tint: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            banner_background: palette::PRIMARY_900,
            banner_text: palette::WHITE,
        }
    }

    /// Detects the system theme and returns the matching scheme.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Dark) = dark_light::detect() {
            Self::dark()
        } else {
            Self::light() // The brochure reads best on white; fall back to it
        }
    }
}

/// Resolved theme for one run of the application.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {}", other)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        })
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    /// Whether the resolved colors are the dark scheme.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.colors.surface_primary.r < 0.5
    }

    /// Base iced theme matching the resolved scheme.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn brand_is_purple_in_both_schemes() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.brand_primary.b > scheme.brand_primary.g);
            assert!(scheme.brand_primary.r > scheme.brand_primary.g);
        }
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("system".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn explicit_modes_resolve_to_matching_iced_theme() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), iced::Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), iced::Theme::Dark);
        let _ = ThemeMode::System.is_dark();
    }
}
