//! # Audio Session
//!
//! Notification channels, payload mapping, and session models for the
//! audio info SDK, plus the capability traits that decouple the adapter
//! layer from any particular host audio environment.
//!
//! ## Overview
//!
//! The host audio environment delivers four kinds of notifications:
//! interruptions, route changes, now-playing-item changes, and
//! playback-state changes. This crate models those channels and their
//! payloads, and defines three capability seams:
//!
//! - [`NotificationSource`] - handler registration (subscribe/unsubscribe)
//! - [`NowPlayingSource`] - query for the current media item
//! - [`AudioRouteSource`] - query for the active audio route
//!
//! In-process implementations ([`NotificationHub`], [`SharedNowPlaying`],
//! [`SharedRoute`]) stand in for the host in tests and demos.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use audio_session::{keys, Channel, NotificationHub, NotificationSource, Payload};
//!
//! let hub = NotificationHub::new();
//!
//! hub.subscribe(Channel::Interruption, Arc::new(|payload: &Payload| {
//!     if let Some(raw) = payload.uint(keys::INTERRUPTION_TYPE) {
//!         println!("interruption raw type: {raw}");
//!     }
//! }))?;
//!
//! // The host (here: the test) posts a notification
//! let payload = Payload::new().with_uint(keys::INTERRUPTION_TYPE, 1);
//! hub.post(Channel::Interruption, &payload);
//! # Ok::<(), audio_session::SessionError>(())
//! ```

pub mod channel;
pub mod error;
pub mod hub;
pub mod interruption;
pub mod now_playing;
pub mod payload;
pub mod route;
pub mod shared;
pub mod source;

// Re-export main types for convenience
pub use channel::Channel;
pub use error::{Result, SessionError};
pub use hub::NotificationHub;
pub use interruption::{InterruptionOptions, InterruptionType};
pub use now_playing::NowPlayingItem;
pub use payload::{keys, Payload, PayloadValue};
pub use route::{AudioPort, AudioRoute, PortType, RouteChangeReason};
pub use shared::{SharedNowPlaying, SharedRoute};
pub use source::{AudioRouteSource, NotificationHandler, NotificationSource, NowPlayingSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        keys, AudioPort, AudioRoute, AudioRouteSource, Channel, InterruptionOptions,
        InterruptionType, NotificationHandler, NotificationHub, NotificationSource,
        NowPlayingItem, NowPlayingSource, Payload, PortType, Result, RouteChangeReason,
        SessionError, SharedNowPlaying, SharedRoute,
    };
}
