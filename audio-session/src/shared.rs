//! Settable in-process capability sources
//!
//! Clone-shared implementations of `NowPlayingSource` and
//! `AudioRouteSource`. A host (or test) keeps one clone to update the
//! state; the adapter queries another clone.

use std::sync::{Arc, PoisonError, RwLock};

use crate::now_playing::NowPlayingItem;
use crate::route::AudioRoute;
use crate::source::{AudioRouteSource, NowPlayingSource};

/// Shared, settable now-playing state
///
/// # Example
///
/// ```rust
/// use audio_session::{NowPlayingItem, NowPlayingSource, SharedNowPlaying};
///
/// let source = SharedNowPlaying::new();
/// assert!(source.now_playing_item().is_none());
///
/// source.set(NowPlayingItem::with_metadata("A", "B", "C"));
/// assert!(source.now_playing_item().is_some());
///
/// source.clear();
/// assert!(source.now_playing_item().is_none());
/// ```
#[derive(Clone, Default)]
pub struct SharedNowPlaying {
    item: Arc<RwLock<Option<NowPlayingItem>>>,
}

impl SharedNowPlaying {
    /// Create with no current item
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current item
    pub fn set(&self, item: NowPlayingItem) {
        *self.item.write().unwrap_or_else(PoisonError::into_inner) = Some(item);
    }

    /// Clear the current item
    pub fn clear(&self) {
        *self.item.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl NowPlayingSource for SharedNowPlaying {
    fn now_playing_item(&self) -> Option<NowPlayingItem> {
        self.item
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for SharedNowPlaying {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedNowPlaying")
            .field("has_item", &self.now_playing_item().is_some())
            .finish()
    }
}

/// Shared, settable audio route state
///
/// Starts as an empty route (no output ports).
#[derive(Clone, Default)]
pub struct SharedRoute {
    route: Arc<RwLock<AudioRoute>>,
}

impl SharedRoute {
    /// Create with an empty route
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active route
    pub fn set(&self, route: AudioRoute) {
        *self.route.write().unwrap_or_else(PoisonError::into_inner) = route;
    }
}

impl AudioRouteSource for SharedRoute {
    fn current_route(&self) -> AudioRoute {
        self.route
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for SharedRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRoute")
            .field("output_count", &self.current_route().outputs.len())
            .finish()
    }
}
