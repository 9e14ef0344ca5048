// SPDX-License-Identifier: MPL-2.0
//! User interface components and shared visual vocabulary.

pub mod browser;
pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod widgets;
