// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size, and spacing value the screens use comes from this
module, so the portal and the back-office stay visually consistent.

## Organization

- **Palette**: warm neutrals plus the green brand ramp
- **Opacity**: overlay and backdrop levels
- **Spacing**: 4px-grid spacing scale
- **Sizing**: fixed component dimensions (thumbnails, toasts, layout caps)
- **Typography**: font size ladder
- **Border** / **Radius** / **Shadow**: stroke, corner, and depth scales

## Examples

```
use society_hub::ui::design_tokens::{opacity, palette};
use iced::Color;

// The lightbox backdrop quiets the page behind the viewer
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
```

## Modification

Scales are related (the compile-time checks below spell the
relationships out). When adjusting a value, keep its neighbors in
order or the assertions will fail the build.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Warm neutrals; a touch of red/green keeps large gray surfaces
    // from looking clinical next to the brand green.
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.11, 0.10);
    pub const GRAY_700: Color = Color::from_rgb(0.32, 0.30, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.43, 0.40);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.76, 0.73);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.86, 0.83);

    // Brand ramp: the society's garden green. Only the steps the
    // screens actually reach for.
    pub const PRIMARY_100: Color = Color::from_rgb(0.87, 0.95, 0.88);
    pub const PRIMARY_400: Color = Color::from_rgb(0.42, 0.75, 0.50);
    pub const PRIMARY_500: Color = Color::from_rgb(0.30, 0.65, 0.40);
    pub const PRIMARY_600: Color = Color::from_rgb(0.22, 0.55, 0.33);
    pub const PRIMARY_800: Color = Color::from_rgb(0.10, 0.35, 0.20);

    // Semantic accents for toasts and inline errors. SUCCESS leans
    // blue-green so it reads apart from the brand ramp.
    pub const ERROR_500: Color = Color::from_rgb(0.83, 0.18, 0.18);
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.60, 0.13);
    pub const SUCCESS_500: Color = Color::from_rgb(0.15, 0.65, 0.45);
    pub const INFO_500: Color = Color::from_rgb(0.25, 0.50, 0.85);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Lightbox backdrop. Dark enough to quiet the grid behind the
    /// viewer without losing it entirely.
    pub const BACKDROP: f32 = 0.88;

    /// Semi-transparent panels layered over page content.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (4px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Gallery grid cells, landscape 3:2-ish like most phone photos.
    pub const THUMB_WIDTH: f32 = 280.0;
    pub const THUMB_HEIGHT: f32 = 190.0;

    // Layout caps so text columns stay readable on wide windows.
    pub const CONTENT_MAX_WIDTH: f32 = 900.0;
    pub const FORM_MAX_WIDTH: f32 = 480.0;
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1100.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size ladder. Each step is distinct enough to read as a
    //! different level without counting pixels.

    /// Page headings (Home, Gallery, Admin).
    pub const TITLE_LG: f32 = 30.0;

    /// The society name in the navbar, card titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers inside a page.
    pub const TITLE_SM: f32 = 18.0;

    /// Form inputs and emphasized lines.
    pub const BODY_LG: f32 = 16.0;

    /// Default for labels and running text.
    pub const BODY: f32 = 14.0;

    /// Hints and secondary labels.
    pub const BODY_SM: f32 = 13.0;

    /// Badges, timestamps, photo counts.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Hairline separators and input outlines.
    pub const WIDTH_SM: f32 = 1.0;

    /// Emphasis strokes: toast accents, the active facet chip.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pill shape for facet chips and badges.
    pub const FULL: f32 = 9999.0;
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing ladder
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity bounds
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG);
    assert!(opacity::SURFACE < opacity::OPAQUE);

    // Layout relationships
    assert!(sizing::THUMB_WIDTH > sizing::THUMB_HEIGHT);
    assert!(sizing::LIGHTBOX_MAX_WIDTH > sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::FORM_MAX_WIDTH);

    // Typography ladder
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Strokes
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
