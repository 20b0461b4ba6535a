//! # Audio Monitor
//!
//! Bridges audio session and now-playing notifications into an ordered,
//! append-only display log.
//!
//! ## Overview
//!
//! The monitor subscribes to four host notification channels
//! (interruption, route change, now-playing-item change, playback-state
//! change) and converts each delivery into one or two log entries. Every
//! entry carries a timestamp, a short header, and a snapshot of the
//! now-playing metadata taken at append time.
//!
//! ## Key Features
//!
//! - **Injected Capabilities**: the notification source and the
//!   now-playing/route queries are constructor parameters, not globals
//! - **Deterministic Teardown**: `close()` releases all four
//!   subscriptions exactly once; `Drop` calls it as a backstop
//! - **Silent Drop of Malformed Payloads**: a missing key or wrong-typed
//!   value drops the notification without appending or erroring
//! - **Observable Log**: the underlying `LogStore` emits an event per
//!   append for display layers to react to
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use audio_monitor::AudioMonitor;
//! use audio_session::{keys, Channel, NotificationHub, Payload, SharedNowPlaying, SharedRoute};
//! use log_store::LogStore;
//!
//! let hub = Arc::new(NotificationHub::new());
//! let store = LogStore::new();
//!
//! let monitor = AudioMonitor::new(
//!     hub.clone(),
//!     Arc::new(SharedNowPlaying::new()),
//!     Arc::new(SharedRoute::new()),
//!     store.clone(),
//! )?;
//!
//! // An interruption begins
//! let payload = Payload::new().with_uint(keys::INTERRUPTION_TYPE, 1);
//! hub.post(Channel::Interruption, &payload);
//!
//! for entry in store.snapshot() {
//!     println!("{}", entry.display_text());
//! }
//!
//! monitor.close();
//! # Ok::<(), audio_monitor::MonitorError>(())
//! ```

pub mod entry;
pub mod error;
pub mod monitor;

// Re-export main types for convenience
pub use entry::{format_timestamp, EntryId, LogEntry};
pub use error::{MonitorError, Result};
pub use monitor::AudioMonitor;

// Re-export commonly used types from dependencies
pub use audio_session::{Channel, Payload};
pub use log_store::LogStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AudioMonitor, Channel, EntryId, LogEntry, LogStore, MonitorError, Payload, Result,
    };
}
