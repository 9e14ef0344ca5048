// SPDX-License-Identifier: MPL-2.0
//! Inline SVG icons.
//!
//! Three icons are enough for this screen, so they are embedded as source
//! strings and rendered through the Iced `svg` widget. All paths use
//! `currentColor`; the effective color is set per use site via the svg
//! style, so the same shapes work on every theme.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};

const CAT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 5c.67 0 1.35.09 2 .26 1.78-2 5.03-2.84 6.42-2.26 1.4.58-.42 7-.42 7 .57 1.07 1 2.24 1 3.44C21 17.9 16.97 21 12 21s-9-3-9-7.56c0-1.25.5-2.4 1-3.44 0 0-1.89-6.42-.5-7 1.39-.58 4.72.23 6.5 2.23A9.04 9.04 0 0 1 12 5Z"/><path d="M8 14v.5"/><path d="M16 14v.5"/><path d="M11.25 16.25h1.5L12 17l-.75-.75Z"/></svg>"##;

const HEART_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/></svg>"##;

const CROSS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 6 6 18"/><path d="m6 6 12 12"/></svg>"##;

/// Cat silhouette for the header.
pub fn cat() -> Svg<'static> {
    Svg::new(Handle::from_memory(CAT_SVG.as_bytes()))
}

/// Heart for the like action.
pub fn heart() -> Svg<'static> {
    Svg::new(Handle::from_memory(HEART_SVG.as_bytes()))
}

/// Cross for the dislike action.
pub fn cross() -> Svg<'static> {
    Svg::new(Handle::from_memory(CROSS_SVG.as_bytes()))
}

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color regardless of theme.
pub fn tinted(icon: Svg<'_>, color: Color) -> Svg<'_> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}
