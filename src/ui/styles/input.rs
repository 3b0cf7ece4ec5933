// SPDX-License-Identifier: MPL-2.0
//! Contact form field styles.

use super::container::scheme_for;
use crate::ui::design_tokens::radius;
use iced::widget::{pick_list, text_input};
use iced::{Background, Theme};

/// Rounded field on the page surface; keeps iced's focus handling.
pub fn field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = scheme_for(theme);
    let base = text_input::default(theme, status);

    text_input::Style {
        background: Background::Color(colors.surface_primary),
        border: base.border.rounded(radius::MD),
        placeholder: colors.text_tertiary,
        value: colors.text_primary,
        ..base
    }
}

/// Property type selector matching [`field`].
pub fn selector(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let colors = scheme_for(theme);
    let base = pick_list::default(theme, status);

    pick_list::Style {
        background: Background::Color(colors.surface_primary),
        border: base.border.rounded(radius::MD),
        placeholder_color: colors.text_tertiary,
        text_color: colors.text_primary,
        ..base
    }
}
