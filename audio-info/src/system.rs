//! AudioInfoSystem - Main entry point for the SDK
//!
//! Wires the in-process hub, the settable player/route sources, the log
//! store, and the monitor into one handle.

use std::sync::Arc;

use audio_monitor::{AudioMonitor, LogEntry};
use audio_session::{
    AudioRoute, Channel, NotificationHub, NowPlayingItem, Payload, SharedNowPlaying, SharedRoute,
};
use log_store::{AppendIterator, LogStore};

use crate::SdkError;

/// Main system entry point
///
/// One call builds the whole pipeline: an in-process notification hub,
/// settable now-playing and route sources, an observable log store, and
/// the monitor subscribed to all four channels. The host drives the
/// system by posting notifications and updating the player state; the
/// display layer reads `entries()` or blocks on `iter()`.
///
/// # Example
///
/// ```rust
/// use audio_info::{AudioInfoSystem, Channel, Payload};
///
/// fn main() -> Result<(), audio_info::SdkError> {
///     let system = AudioInfoSystem::new()?;
///
///     // The host posts a notification
///     system.post(Channel::PlaybackStateChanged, &Payload::new());
///
///     // The user taps "Get Info"
///     system.request_info();
///
///     for entry in system.entries() {
///         println!("{}", entry.display_text());
///     }
///
///     system.close();
///     Ok(())
/// }
/// ```
pub struct AudioInfoSystem {
    /// In-process notification hub the host posts through
    hub: Arc<NotificationHub>,

    /// Settable now-playing state
    now_playing: SharedNowPlaying,

    /// Settable audio route state
    routes: SharedRoute,

    /// The observable event log
    store: LogStore<LogEntry>,

    /// The monitor owning the four subscriptions
    monitor: AudioMonitor,
}

impl AudioInfoSystem {
    /// Build a fully wired system
    ///
    /// Appends the `"App Started"` entry and subscribes the monitor to
    /// all four channels.
    pub fn new() -> Result<Self, SdkError> {
        let hub = Arc::new(NotificationHub::new());
        let now_playing = SharedNowPlaying::new();
        let routes = SharedRoute::new();
        let store = LogStore::new();

        let monitor = AudioMonitor::new(
            hub.clone(),
            Arc::new(now_playing.clone()),
            Arc::new(routes.clone()),
            store.clone(),
        )?;

        Ok(Self {
            hub,
            now_playing,
            routes,
            store,
            monitor,
        })
    }

    /// Post a notification into the system
    ///
    /// Returns whether a handler received it (false after `close()`).
    pub fn post(&self, channel: Channel, payload: &Payload) -> bool {
        self.hub.post(channel, payload)
    }

    /// Set the current now-playing item
    pub fn set_now_playing(&self, item: NowPlayingItem) {
        self.now_playing.set(item);
    }

    /// Clear the current now-playing item
    pub fn clear_now_playing(&self) {
        self.now_playing.clear();
    }

    /// Replace the active audio route
    pub fn set_route(&self, route: AudioRoute) {
        self.routes.set(route);
    }

    /// Manual trigger: append a `"User requested info"` entry
    pub fn request_info(&self) {
        self.monitor.request_info();
    }

    /// Snapshot of the current log entries, in append order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.store.snapshot()
    }

    /// A handle to the underlying log store
    pub fn log(&self) -> LogStore<LogEntry> {
        self.store.clone()
    }

    /// Blocking iterator over append events
    pub fn iter(&self) -> AppendIterator {
        self.store.iter()
    }

    /// Release the monitor's subscriptions
    ///
    /// Idempotent. After this returns, posts no longer append entries.
    pub fn close(&self) {
        self.monitor.close();
    }
}

impl std::fmt::Debug for AudioInfoSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioInfoSystem")
            .field("entry_count", &self.store.len())
            .finish()
    }
}
