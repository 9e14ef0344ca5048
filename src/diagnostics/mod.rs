// SPDX-License-Identifier: MPL-2.0
//! Bounded in-process diagnostics channel.
//!
//! Fetch failures are logged to stderr and also recorded here as timestamped
//! events, so a troubleshooting session can export what happened without
//! scrolling a terminal. The buffer is bounded; old events are dropped first.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::path::Path;

/// Default number of retained events.
const DEFAULT_CAPACITY: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One recorded event.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub severity: Severity,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

/// Bounded event buffer.
#[derive(Debug)]
pub struct Collector {
    events: VecDeque<Event>,
    capacity: usize,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity: capacity.max(1),
        }
    }

    /// Records an event, dropping the oldest one when full.
    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(Event {
            severity,
            message: message.into(),
            occurred_at: Utc::now(),
        });
    }

    /// Number of recorded error events currently retained.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .count()
    }

    /// Events from oldest to newest.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Exports the retained events as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&Event> = self.events.iter().collect();
        serde_json::to_string_pretty(&events)
    }

    /// Writes the JSON export to `path`, creating parent directories.
    pub fn export_to_path(&self, path: &Path) -> Result<()> {
        let json = self
            .export_json()
            .map_err(|e| Error::Io(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}
