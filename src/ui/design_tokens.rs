// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for the gallery's look and motion.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Tile, modal and control sizes
- **Layout**: Responsive breakpoints
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Transition distances and durations

## Examples

```
use iced_folio::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    /// Backdrop surface behind an open modal.
    pub const BACKDROP: f32 = 0.96;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Intrinsic edge of a grid tile image.
    pub const TILE_IMAGE: u32 = 280;

    /// Intrinsic edge of the modal image.
    pub const MODAL_IMAGE: u32 = 400;

    /// Maximum width of the modal content column.
    pub const MODAL_MAX_WIDTH: f32 = 640.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOOLTIP_MAX_WIDTH: f32 = 280.0;
}

// ============================================================================
// Layout Breakpoints
// ============================================================================

pub mod layout {
    /// Below this width the grid uses two columns.
    pub const BREAKPOINT_MD: f32 = 768.0;

    /// Below this width the grid uses its tightest gap.
    pub const BREAKPOINT_SM: f32 = 640.0;

    pub const COLUMNS_NARROW: usize = 2;
    pub const COLUMNS_WIDE: usize = 4;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Modal title.
    pub const TITLE_LG: f32 = 30.0;

    /// Empty-state heading.
    pub const TITLE_MD: f32 = 20.0;

    /// Modal description.
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radii
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
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
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Scale of the modal image before it grows in.
    pub const IMAGE_START_SCALE: f32 = 0.5;

    /// Downward offset of the modal text before it settles.
    pub const TEXT_START_OFFSET: f32 = 16.0;

    /// Distance a grid tile slides up when scrolled into view.
    pub const REVEAL_DISTANCE: f32 = 24.0;

    /// Duration of the scroll-into-view entrance.
    pub const REVEAL_ENTRANCE: Duration = Duration::from_millis(500);
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
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP <= 1.0);

    // Layout validation
    assert!(layout::BREAKPOINT_SM < layout::BREAKPOINT_MD);
    assert!(layout::COLUMNS_NARROW < layout::COLUMNS_WIDE);

    // Sizing validation
    assert!(sizing::MODAL_IMAGE > sizing::TILE_IMAGE);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);

    // Motion validation
    assert!(motion::IMAGE_START_SCALE > 0.0 && motion::IMAGE_START_SCALE < 1.0);
    assert!(motion::TEXT_START_OFFSET > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn grid_gaps_follow_spacing_scale() {
        // The responsive grid steps through these three gaps.
        assert!(spacing::MD < spacing::LG && spacing::LG < spacing::XL);
    }
}
