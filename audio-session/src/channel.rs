//! Notification channel definitions

use serde::{Deserialize, Serialize};

/// Notification channels delivered by the host audio environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Audio session interruption began or ended
    Interruption,

    /// Audio route changed (device plugged/unplugged, output switched)
    RouteChange,

    /// The current now-playing item changed
    NowPlayingItemChanged,

    /// The playback state changed (playing, paused, stopped)
    PlaybackStateChanged,
}

impl Channel {
    /// Get the name of this channel as a string
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Interruption => "Interruption",
            Channel::RouteChange => "RouteChange",
            Channel::NowPlayingItemChanged => "NowPlayingItemChanged",
            Channel::PlaybackStateChanged => "PlaybackStateChanged",
        }
    }

    /// All channels, in subscription order
    pub fn all() -> [Channel; 4] {
        [
            Channel::Interruption,
            Channel::RouteChange,
            Channel::NowPlayingItemChanged,
            Channel::PlaybackStateChanged,
        ]
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(Channel::Interruption.name(), "Interruption");
        assert_eq!(Channel::RouteChange.name(), "RouteChange");
    }

    #[test]
    fn test_all_covers_every_channel() {
        let all = Channel::all();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&Channel::NowPlayingItemChanged));
        assert!(all.contains(&Channel::PlaybackStateChanged));
    }
}
