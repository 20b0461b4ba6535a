//! Log entry types
//!
//! A `LogEntry` is one row of the event log: an opaque id, a creation
//! timestamp, a short header describing the triggering event, and an
//! optional snapshot of the now-playing metadata taken at creation.
//! Entries are immutable after creation.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a log entry, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the event log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique id, assigned at creation
    pub id: EntryId,

    /// Creation time
    pub timestamp: DateTime<Local>,

    /// Short description of the triggering event
    pub header: String,

    /// Snapshot of the now-playing metadata at creation, if a media
    /// item was active
    pub now_playing_summary: Option<String>,
}

impl LogEntry {
    /// Create an entry timestamped now
    pub fn new(header: impl Into<String>, now_playing_summary: Option<String>) -> Self {
        Self::at(Local::now(), header, now_playing_summary)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(
        timestamp: DateTime<Local>,
        header: impl Into<String>,
        now_playing_summary: Option<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            timestamp,
            header: header.into(),
            now_playing_summary,
        }
    }

    /// Render the entry's display text
    ///
    /// Three newline-joined lines: the formatted timestamp, the header,
    /// and the metadata snapshot (empty string if none was active).
    pub fn display_text(&self) -> String {
        [
            format_timestamp(&self.timestamp),
            self.header.clone(),
            self.now_playing_summary.clone().unwrap_or_default(),
        ]
        .join("\n")
    }
}

/// Render a timestamp in long-date/medium-time style
///
/// Example: `July 23, 2022 at 2:45:12 PM`.
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%B %-d, %Y at %-I:%M:%S %p").to_string()
}
