use thiserror::Error;

use audio_session::{Channel, SessionError};

/// Errors that can occur in the audio monitor
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Error registering a notification handler
    #[error("Failed to subscribe to channel {channel}: {source}")]
    Subscription {
        channel: Channel,
        #[source]
        source: SessionError,
    },
}

/// Result type for audio monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;
