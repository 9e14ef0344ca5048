// SPDX-License-Identifier: MPL-2.0
//! `meow_match` is a single-screen cat browser built with the Iced GUI
//! framework.
//!
//! It fetches random cat pictures from TheCatAPI, shows one card at a time,
//! and lets the user like or dislike it with a short swipe animation before
//! the next cat arrives. It also demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/meow_match/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
