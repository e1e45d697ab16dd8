// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the showcase's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors and the warm section gradient
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Breakpoints**: Viewport widths that switch layout
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use outcome_showcase::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Dim a label
let dimmed = Color {
    a: opacity::DIMMED,
    ..palette::WHITE
};

// Use the spacing scale
let padding = spacing::LG; // 24px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Keep the compile-time validation block passing
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
    pub const GRAY_900: Color = Color::from_rgb(0.098, 0.098, 0.098); // #191919
    pub const MEDIA_BACKDROP: Color = Color::from_rgb(0.122, 0.122, 0.122); // #1f1f1f
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4); // #666666
    pub const LIST_TEXT: Color = Color::from_rgb(0.878, 0.878, 0.878); // #e0e0e0
    pub const NEUTRAL_100: Color = Color::from_rgb(0.961, 0.961, 0.961); // #f5f5f5

    // Warm section gradient
    pub const CREAM: Color = Color::from_rgb(0.996, 0.961, 0.839); // #FEF5D6
    pub const APRICOT: Color = Color::from_rgb(1.0, 0.8, 0.573); // #FFCC92
    pub const PEACH: Color = Color::from_rgb(1.0, 0.671, 0.51); // #FFAB82
    pub const BLUSH: Color = Color::from_rgb(1.0, 0.769, 0.655); // #FFC4A7

    // Accent (CTA, bullets)
    pub const ACCENT_500: Color = Color::from_rgb(1.0, 0.518, 0.251); // #FF8440
    pub const ACCENT_600: Color = Color::from_rgb(0.918, 0.431, 0.176); // #EA6E2D

    pub const BADGE_BORDER: Color = Color::from_rgb(0.847, 0.824, 0.792); // #d8d2ca
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Hover wash on tab headers
    pub const HOVER_WASH: f32 = 0.05;
    /// Badge pill and active row surface
    pub const BADGE_SURFACE: f32 = 0.24;
    /// Tab panel backdrop
    pub const PANEL_SURFACE: f32 = 0.3;
    /// Section gradient overlay
    pub const SCRIM: f32 = 0.4;
    /// Inactive tab labels
    pub const DIMMED: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
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
    pub const XXXL: f32 = 80.0; // 10 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_BULLET: f32 = 20.0;
    pub const ICON_MD: f32 = 24.0;

    // Interactive element heights
    pub const CTA_HEIGHT: f32 = 56.0;

    // Panels
    pub const TAB_COLUMN_WIDTH: f32 = 602.0;
    pub const SIDE_MEDIA_WIDTH: f32 = 630.0;
    pub const SIDE_MEDIA_MIN_HEIGHT: f32 = 756.0;
    /// Minimum body height on wide viewports, so the column lines up
    /// with the side media.
    pub const BODY_MIN_HEIGHT: f32 = 415.0;
    /// Upper bound used to animate the accordion height.
    pub const BODY_MAX_HEIGHT: f32 = 1200.0;
    pub const INLINE_MEDIA_HEIGHT: f32 = 600.0;
    pub const INLINE_MEDIA_HEIGHT_MD: f32 = 700.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;
    pub const HEADLINE_MAX_WIDTH: f32 = 824.0;
    pub const BLURB_MAX_WIDTH: f32 = 900.0;
}

// ============================================================================
// Breakpoints
// ============================================================================

pub mod breakpoint {
    /// Medium viewports get the taller inline media slot.
    pub const MD: f32 = 768.0;
    /// Smallest width that still fits the tab column beside the side media.
    pub const LG: f32 = 1024.0;
    /// Wide viewports move media into the side panel.
    pub const XL: f32 = 1280.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Headline: section heading
    //! - Title: tab labels and panel titles
    //! - Body: lists, blurb and CTA
    //! - Caption: badge and media captions

    pub const HEADLINE: f32 = 48.0;
    pub const HEADLINE_SM: f32 = 36.0;
    pub const TITLE: f32 = 18.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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
    assert!(opacity::DIMMED > 0.0 && opacity::DIMMED < 1.0);

    // Sizing validation
    assert!(sizing::INLINE_MEDIA_HEIGHT_MD > sizing::INLINE_MEDIA_HEIGHT);
    assert!(sizing::BODY_MAX_HEIGHT > sizing::BODY_MIN_HEIGHT);

    // Breakpoint validation
    assert!(breakpoint::XL > breakpoint::LG);
    assert!(breakpoint::LG > breakpoint::MD);

    // Typography validation
    assert!(typography::HEADLINE > typography::HEADLINE_SM);
    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
