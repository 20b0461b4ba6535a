//! # Audio Info SDK
//!
//! Turns audio session and now-playing notifications into an ordered,
//! append-only, displayable event log.
//!
//! ```rust
//! use audio_info::{keys, AudioInfoSystem, Channel, Payload};
//!
//! fn main() -> Result<(), audio_info::SdkError> {
//!     let system = AudioInfoSystem::new()?;
//!
//!     // An interruption began (phone call, alarm, ...)
//!     let payload = Payload::new().with_uint(keys::INTERRUPTION_TYPE, 1);
//!     system.post(Channel::Interruption, &payload);
//!
//!     for entry in system.entries() {
//!         println!("{}", entry.display_text());
//!     }
//!
//!     system.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **One-call setup**: `AudioInfoSystem::new()` wires the hub, the
//!   player/route sources, the log store, and the monitor
//! - **Append-only log**: entries are immutable, strictly ordered, and
//!   observable via a blocking iterator
//! - **Injected capabilities**: swap the in-process hub and sources for
//!   a real host environment through the `audio_session` traits
//! - **Quiet by default**: the `logging` module keeps diagnostics off
//!   TUI screens unless explicitly enabled
//!
//! ## Architecture
//!
//! ```text
//! audio-info (facade + wiring)
//!     ↓
//! audio-monitor (notifications → log entries)
//!     ↓                        ↓
//! audio-session            log-store
//! (channels, payloads,     (append-only storage,
//!  capability traits)       change events)
//! ```

// Main exports
pub use error::SdkError;
pub use system::AudioInfoSystem;

// Re-export commonly used types from the stack
pub use audio_monitor::{AudioMonitor, EntryId, LogEntry};
pub use audio_session::{
    keys, AudioPort, AudioRoute, Channel, InterruptionOptions, InterruptionType, NowPlayingItem,
    Payload, PortType, RouteChangeReason,
};
pub use log_store::{AppendEvent, AppendIterator, LogStore};

// Internal modules
mod error;
mod system;

pub mod logging;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        keys, AudioInfoSystem, AudioRoute, Channel, LogEntry, NowPlayingItem, Payload,
        RouteChangeReason, SdkError,
    };
}
