// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the application.
//!
//! - **Palette**: base colors (amber brand, semantic like/dislike)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (amber scale)
    pub const AMBER_50: Color = Color::from_rgb(1.0, 0.984, 0.922);
    pub const AMBER_100: Color = Color::from_rgb(0.996, 0.953, 0.78);
    pub const AMBER_200: Color = Color::from_rgb(0.992, 0.902, 0.541);
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.62, 0.043);
    pub const AMBER_600: Color = Color::from_rgb(0.851, 0.467, 0.024);
    pub const AMBER_800: Color = Color::from_rgb(0.571, 0.251, 0.055);
    pub const AMBER_900: Color = Color::from_rgb(0.47, 0.208, 0.059);

    // Semantic colors
    pub const LIKE_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const LIKE_600: Color = Color::from_rgb(0.086, 0.639, 0.29);
    pub const DISLIKE_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const DISLIKE_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.25;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Shadow alpha for elevated surfaces.
    pub const SHADOW: f32 = 0.2;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Diameter of the round like/dislike buttons.
    pub const ACTION_BUTTON: f32 = 64.0;

    /// Card stage, 3:4 portrait like a photo print.
    pub const CARD_WIDTH: f32 = 330.0;
    pub const CARD_HEIGHT: f32 = 440.0;

    /// Horizontal distance a dismissed card travels before fading out.
    pub const EXIT_TRAVEL: f32 = 200.0;
}

pub mod typography {
    /// App name in the header.
    pub const TITLE_LG: f32 = 30.0;

    /// Standard body text.
    pub const BODY: f32 = 14.0;

    /// Hints and error details.
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 20.0,
    };
}

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::CARD_HEIGHT > sizing::CARD_WIDTH);
    assert!(sizing::ACTION_BUTTON > sizing::ICON_LG);

    // Typography validation
    assert!(typography::TITLE_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
