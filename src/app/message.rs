// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and startup flags.

use crate::ui::browser;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Events from the card browser component.
    Browser(browser::Message),
    /// Animation clock, active only while something on screen moves.
    Tick(Instant),
    /// Save the diagnostics event buffer to a JSON file (Ctrl/Cmd+D).
    ExportDiagnostics,
}

/// Startup options parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    pub lang: Option<String>,
    pub api_url: Option<String>,
    pub i18n_dir: Option<String>,
}
