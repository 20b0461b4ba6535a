use thiserror::Error;

use crate::channel::Channel;

/// Errors that can occur in the audio session layer
#[derive(Error, Debug)]
pub enum SessionError {
    /// A handler is already registered for the channel
    #[error("Channel {0} already has a registered handler")]
    ChannelOccupied(Channel),

    /// Internal synchronization error
    #[error("Internal synchronization error: {0}")]
    Sync(String),
}

/// Result type for audio session operations
pub type Result<T> = std::result::Result<T, SessionError>;
