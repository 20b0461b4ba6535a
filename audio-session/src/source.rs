//! Capability traits for pluggable host environments
//!
//! This module defines the seams between the adapter layer and the host
//! audio environment. A real host wires these to its audio subsystem;
//! tests and demos use the in-process implementations from this crate.

use std::sync::Arc;

use crate::channel::Channel;
use crate::error::Result;
use crate::now_playing::NowPlayingItem;
use crate::payload::Payload;
use crate::route::AudioRoute;

/// A registered notification handler
///
/// Handlers are invoked synchronously during dispatch, with delivery
/// serialized per source.
pub type NotificationHandler = Arc<dyn Fn(&Payload) + Send + Sync>;

/// A source of asynchronous host notifications
///
/// Implementations own the channel-to-handler registration and deliver
/// payloads to the registered handler when the host posts on a channel.
/// Dispatch must be synchronous and serialized: no two handlers run
/// concurrently for the same source.
pub trait NotificationSource: Send + Sync {
    /// Register a handler for a channel
    ///
    /// Returns an error if the channel already has a handler.
    fn subscribe(&self, channel: Channel, handler: NotificationHandler) -> Result<()>;

    /// Remove the handler for a channel
    ///
    /// Returns whether a handler was registered. After this call no
    /// payload may be delivered to the removed handler.
    fn unsubscribe(&self, channel: Channel) -> bool;
}

/// A query for the currently playing media item
pub trait NowPlayingSource: Send + Sync {
    /// The current now-playing item, if any
    fn now_playing_item(&self) -> Option<NowPlayingItem>;
}

/// A query for the active audio route
pub trait AudioRouteSource: Send + Sync {
    /// The currently active route
    fn current_route(&self) -> AudioRoute;
}
