// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and type step used by the page.

## Organization

- **Palette**: Base colors (purple brand, neutral grays, semantic colors)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes and layout breakpoints
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use yadadri360::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::PRIMARY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Brand colors (purple scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.953, 0.910, 1.0);
    pub const PRIMARY_300: Color = Color::from_rgb(0.847, 0.706, 0.996);
    pub const PRIMARY_400: Color = Color::from_rgb(0.753, 0.518, 0.988);
    pub const PRIMARY_500: Color = Color::from_rgb(0.659, 0.333, 0.969);
    pub const PRIMARY_600: Color = Color::from_rgb(0.576, 0.200, 0.918);
    pub const PRIMARY_700: Color = Color::from_rgb(0.494, 0.133, 0.808);
    pub const PRIMARY_800: Color = Color::from_rgb(0.420, 0.129, 0.659);
    pub const PRIMARY_900: Color = Color::from_rgb(0.345, 0.110, 0.529);

    // Rating stars
    pub const STAR: Color = Color::from_rgb(0.980, 0.800, 0.082);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar and toast surfaces.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Page frame
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    /// Below this window width the navigation collapses behind a toggle.
    pub const COMPACT_BREAKPOINT: f32 = 768.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 40.0;

    // Carousels
    pub const GALLERY_SLIDE_HEIGHT: f32 = 440.0;
    pub const THUMBNAIL_WIDTH: f32 = 160.0;
    pub const THUMBNAIL_HEIGHT: f32 = 100.0;
    pub const DOT: f32 = 12.0;
    pub const AVATAR: f32 = 80.0;
    pub const STAR: f32 = 18.0;

    // Cards
    pub const ICON_BADGE: f32 = 56.0;

    // Notifications
    pub const TOAST_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! Display sizes are reserved for the hero; titles head sections and
    //! cards; body and caption carry everything else.

    /// Hero headline.
    pub const DISPLAY: f32 = 48.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 34.0;

    /// Brand name in the navbar, stat figures.
    pub const TITLE_MD: f32 = 22.0;

    /// Card headings.
    pub const TITLE_SM: f32 = 18.0;

    /// Hero tagline, quotes.
    pub const BODY_LG: f32 = 17.0;

    pub const BODY: f32 = 15.0;

    pub const BODY_SM: f32 = 13.0;

    /// Captions, copyright line.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Input fields, card outlines.
    pub const WIDTH_SM: f32 = 1.0;

    /// Active thumbnail, toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SOFT_BLACK: Color = Color {
        a: 0.15,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XXXL > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(sizing::COMPACT_BREAKPOINT < sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::THUMBNAIL_HEIGHT < sizing::GALLERY_SLIDE_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
        assert_eq!(spacing::XXXL, spacing::XL * 2.0);
    }

    #[test]
    fn brand_scale_darkens_monotonically() {
        let steps = [
            palette::PRIMARY_100,
            palette::PRIMARY_300,
            palette::PRIMARY_500,
            palette::PRIMARY_700,
            palette::PRIMARY_900,
        ];
        for pair in steps.windows(2) {
            assert!(pair[0].g > pair[1].g);
        }
    }
}
