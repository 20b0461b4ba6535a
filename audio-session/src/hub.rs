//! In-process notification hub
//!
//! `NotificationHub` is the in-process implementation of
//! `NotificationSource`: one handler per channel, synchronous serialized
//! dispatch. Tests and demos post payloads through it to stand in for
//! the host audio environment.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};

use crate::channel::Channel;
use crate::error::{Result, SessionError};
use crate::payload::Payload;
use crate::source::{NotificationHandler, NotificationSource};

/// Synchronous, serialized notification dispatcher
///
/// At most one handler is registered per channel. `post` looks up the
/// handler and invokes it inline on the calling thread; a dispatch lock
/// serializes deliveries, so handlers never run concurrently even when
/// posts arrive from multiple threads.
///
/// The handler map is not held locked during dispatch, so a handler may
/// unsubscribe (itself or another channel) re-entrantly.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use audio_session::{Channel, NotificationHub, NotificationSource, Payload};
///
/// let hub = NotificationHub::new();
/// hub.subscribe(Channel::PlaybackStateChanged, Arc::new(|_payload: &Payload| {
///     // react to the state change
/// })).unwrap();
///
/// assert!(hub.post(Channel::PlaybackStateChanged, &Payload::new()));
/// assert!(!hub.post(Channel::Interruption, &Payload::new()));
/// ```
pub struct NotificationHub {
    /// Registered handlers, one per channel
    handlers: RwLock<HashMap<Channel, NotificationHandler>>,

    /// Serializes dispatch across posting threads
    dispatch_lock: Mutex<()>,
}

impl NotificationHub {
    /// Create a new hub with no registrations
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            dispatch_lock: Mutex::new(()),
        }
    }

    /// Deliver a payload to the channel's handler, if one is registered
    ///
    /// Returns whether a handler received the payload. Posting on a
    /// channel with no handler is not an error; the payload is dropped.
    pub fn post(&self, channel: Channel, payload: &Payload) -> bool {
        let handler = {
            let handlers = self
                .handlers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            handlers.get(&channel).cloned()
        };

        match handler {
            Some(handler) => {
                let _serialized = self
                    .dispatch_lock
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                tracing::debug!(channel = channel.name(), "dispatching notification");
                handler(payload);
                true
            }
            None => {
                tracing::debug!(channel = channel.name(), "no handler, payload dropped");
                false
            }
        }
    }

    /// Check if a channel currently has a handler
    pub fn is_subscribed(&self, channel: Channel) -> bool {
        self.handlers
            .read()
            .map(|handlers| handlers.contains_key(&channel))
            .unwrap_or(false)
    }

    /// Number of channels with registered handlers
    pub fn subscription_count(&self) -> usize {
        self.handlers
            .read()
            .map(|handlers| handlers.len())
            .unwrap_or(0)
    }
}

impl NotificationSource for NotificationHub {
    fn subscribe(&self, channel: Channel, handler: NotificationHandler) -> Result<()> {
        let mut handlers = self
            .handlers
            .write()
            .map_err(|_| SessionError::Sync("handler map lock poisoned".to_string()))?;

        if handlers.contains_key(&channel) {
            return Err(SessionError::ChannelOccupied(channel));
        }

        tracing::debug!(channel = channel.name(), "handler registered");
        handlers.insert(channel, handler);
        Ok(())
    }

    fn unsubscribe(&self, channel: Channel) -> bool {
        let removed = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&channel)
            .is_some();

        if removed {
            tracing::debug!(channel = channel.name(), "handler removed");
        } else {
            tracing::warn!(
                channel = channel.name(),
                "unsubscribe on a channel with no handler"
            );
        }

        removed
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("subscription_count", &self.subscription_count())
            .finish()
    }
}
