//! Audio session event monitor
//!
//! `AudioMonitor` bridges the four host notification channels into
//! log-append calls. Capabilities are injected at construction; the
//! monitor owns its four subscriptions and releases them exactly once
//! on `close()` (or on drop).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use audio_session::{
    keys, AudioRouteSource, Channel, InterruptionOptions, InterruptionType, NotificationSource,
    NowPlayingSource, Payload, RouteChangeReason,
};
use log_store::LogStore;

use crate::entry::LogEntry;
use crate::error::{MonitorError, Result};

/// Shared state captured by the notification handlers
struct MonitorContext {
    store: LogStore<LogEntry>,
    now_playing: Arc<dyn NowPlayingSource>,
    routes: Arc<dyn AudioRouteSource>,
}

impl MonitorContext {
    /// Append an entry, snapshotting the now-playing metadata
    fn append(&self, header: &str) {
        let summary = self
            .now_playing
            .now_playing_item()
            .map(|item| item.summary());
        self.store.append(LogEntry::new(header, summary));
    }

    fn handle_interruption(&self, payload: &Payload) {
        let kind = match payload
            .uint(keys::INTERRUPTION_TYPE)
            .and_then(InterruptionType::from_raw)
        {
            Some(kind) => kind,
            None => {
                tracing::debug!("interruption with missing or invalid type, dropped");
                return;
            }
        };

        match kind {
            InterruptionType::Began => {
                self.append("An interruption began.");
            }
            InterruptionType::Ended => {
                self.append("An interruption ended.");

                // Absent or wrong-typed options read as no flags set.
                let options = InterruptionOptions::from_raw(
                    payload.uint(keys::INTERRUPTION_OPTIONS).unwrap_or(0),
                );
                if options.should_resume() {
                    self.append("Resume playback.");
                } else {
                    self.append("Don't resume playback.");
                }
            }
        }
    }

    fn handle_route_change(&self, payload: &Payload) {
        let reason = match payload
            .uint(keys::ROUTE_CHANGE_REASON)
            .and_then(RouteChangeReason::from_raw)
        {
            Some(reason) => reason,
            None => {
                tracing::debug!("route change with missing or unrecognized reason, dropped");
                return;
            }
        };

        match reason {
            RouteChangeReason::NewDeviceAvailable => {
                let headphones_connected = self.routes.current_route().has_headphones();
                tracing::debug!(headphones_connected, "route gained a device");
                self.append("new Device Available");
            }
            RouteChangeReason::OldDeviceUnavailable => {
                self.append("old Device Unavailable");
                if let Some(previous) = payload.route(keys::PREVIOUS_ROUTE) {
                    let headphones_connected = previous.has_headphones();
                    tracing::debug!(headphones_connected, "route lost a device");
                }
            }
            _ => {
                tracing::debug!(reason = ?reason, "route change reason not logged");
            }
        }
    }

    fn handle_now_playing_item_changed(&self, _payload: &Payload) {
        self.append("Playing Item Did Change.");
    }

    fn handle_playback_state_changed(&self, _payload: &Payload) {
        self.append("Playback State Did Change.");
    }
}

/// Bridges host audio notifications into an append-only event log
///
/// On construction the monitor appends an `"App Started"` entry and
/// subscribes to all four notification channels. Each delivered
/// notification is formatted into one or two entries carrying a
/// timestamp and a snapshot of the now-playing metadata.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use audio_monitor::AudioMonitor;
/// use audio_session::{Channel, NotificationHub, Payload, SharedNowPlaying, SharedRoute};
/// use log_store::LogStore;
///
/// let hub = Arc::new(NotificationHub::new());
/// let store = LogStore::new();
///
/// let monitor = AudioMonitor::new(
///     hub.clone(),
///     Arc::new(SharedNowPlaying::new()),
///     Arc::new(SharedRoute::new()),
///     store.clone(),
/// )?;
///
/// // The host posts a notification
/// hub.post(Channel::PlaybackStateChanged, &Payload::new());
/// assert_eq!(store.len(), 2); // "App Started" + the state change
///
/// monitor.close();
/// # Ok::<(), audio_monitor::MonitorError>(())
/// ```
pub struct AudioMonitor {
    notifications: Arc<dyn NotificationSource>,
    context: Arc<MonitorContext>,
    closed: AtomicBool,
}

impl AudioMonitor {
    /// Create a monitor and subscribe to all four channels
    ///
    /// Appends the `"App Started"` entry before subscribing. If any
    /// subscription fails, the ones already made are released and the
    /// error is returned.
    pub fn new(
        notifications: Arc<dyn NotificationSource>,
        now_playing: Arc<dyn NowPlayingSource>,
        routes: Arc<dyn AudioRouteSource>,
        store: LogStore<LogEntry>,
    ) -> Result<Self> {
        let context = Arc::new(MonitorContext {
            store,
            now_playing,
            routes,
        });

        context.append("App Started");
        Self::subscribe_all(&notifications, &context)?;
        tracing::debug!("audio monitor subscribed to all channels");

        Ok(Self {
            notifications,
            context,
            closed: AtomicBool::new(false),
        })
    }

    fn subscribe_all(
        notifications: &Arc<dyn NotificationSource>,
        context: &Arc<MonitorContext>,
    ) -> Result<()> {
        let subscriptions: [(Channel, fn(&MonitorContext, &Payload)); 4] = [
            (Channel::Interruption, MonitorContext::handle_interruption),
            (Channel::RouteChange, MonitorContext::handle_route_change),
            (
                Channel::NowPlayingItemChanged,
                MonitorContext::handle_now_playing_item_changed,
            ),
            (
                Channel::PlaybackStateChanged,
                MonitorContext::handle_playback_state_changed,
            ),
        ];

        let mut subscribed = Vec::new();
        for (channel, handler) in subscriptions {
            let context = Arc::clone(context);
            let result = notifications.subscribe(
                channel,
                Arc::new(move |payload: &Payload| handler(&context, payload)),
            );

            match result {
                Ok(()) => subscribed.push(channel),
                Err(source) => {
                    // Roll back only the registrations made here.
                    for channel in subscribed {
                        notifications.unsubscribe(channel);
                    }
                    return Err(MonitorError::Subscription { channel, source });
                }
            }
        }

        Ok(())
    }

    /// Manual trigger: append a `"User requested info"` entry
    ///
    /// Direct calls work before and after `close()`; only channel
    /// delivery is cut off by teardown.
    pub fn request_info(&self) {
        self.context.append("User requested info");
    }

    /// A handle to the underlying log store
    pub fn log(&self) -> LogStore<LogEntry> {
        self.context.store.clone()
    }

    /// Release all four channel subscriptions
    ///
    /// Idempotent: the first call tears down, later calls are no-ops.
    /// After this returns, no notification may append an entry.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        for channel in Channel::all() {
            self.notifications.unsubscribe(channel);
        }
        tracing::debug!("audio monitor closed, subscriptions released");
    }

    /// Whether `close()` has run
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Drop for AudioMonitor {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for AudioMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioMonitor")
            .field("closed", &self.is_closed())
            .field("entry_count", &self.context.store.len())
            .finish()
    }
}
