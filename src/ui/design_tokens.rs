// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes used by the banner views.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Banner and card geometry
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_banner::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```

Card geometry in [`sizing`] is shared with the hit-testing code in
[`crate::ui::scene`]; keep both in sync by only using these constants.
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Dimmed area behind the expanded card.
    pub const BACKDROP: f32 = 0.55;

    /// Banner and card background.
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// App icon in the banner header.
    pub const APP_ICON: f32 = 20.0;

    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Widest the collapsed banner and expanded card get.
    pub const BANNER_MAX_WIDTH: f32 = 480.0;

    /// Top edge of the expanded card at rest.
    pub const CARD_TOP: f32 = 96.0;
    pub const CARD_HEADER_HEIGHT: f32 = 40.0;
    pub const CARD_MESSAGE_HEIGHT: f32 = 112.0;
    /// Gap between the message card and the action list.
    pub const CARD_GAP: f32 = 8.0;
    pub const ACTION_ROW_HEIGHT: f32 = 48.0;

    /// Distance from the dismiss hint to the card top.
    pub const DISMISS_LABEL_OFFSET: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dismiss hint above the expanded card.
    pub const TITLE_MD: f32 = 20.0;

    /// Banner title.
    pub const BODY_LG: f32 = 16.0;

    /// Banner body and action titles.
    pub const BODY: f32 = 14.0;

    /// App name in the header.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Separators between action rows, icon placeholder.
    pub const WIDTH_SM: f32 = 1.0;

    /// Accent edge of the collapsed banner.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::CARD_TOP > sizing::DISMISS_LABEL_OFFSET);
    assert!(sizing::ACTION_ROW_HEIGHT >= sizing::INPUT_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
