//! Audio session interruption types

use serde::{Deserialize, Serialize};

/// Kind of an audio session interruption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterruptionType {
    /// An interruption ended and the session may become active again
    Ended,
    /// Another audio session took over (phone call, alarm, etc.)
    Began,
}

impl InterruptionType {
    /// Decode from the host's raw notification value
    ///
    /// The host encodes `Ended` as 0 and `Began` as 1. Any other value
    /// is unrecognized and the notification should be dropped.
    pub fn from_raw(raw: u64) -> Option<Self> {
        match raw {
            0 => Some(InterruptionType::Ended),
            1 => Some(InterruptionType::Began),
            _ => None,
        }
    }

    /// The host's raw value for this type
    pub fn as_raw(&self) -> u64 {
        match self {
            InterruptionType::Ended => 0,
            InterruptionType::Began => 1,
        }
    }
}

/// Option bits attached to an interruption-ended notification
///
/// The only defined bit signals that playback should resume once the
/// interruption is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterruptionOptions(u64);

impl InterruptionOptions {
    /// Bit set when the host recommends resuming playback
    pub const SHOULD_RESUME: u64 = 1;

    /// Wrap the host's raw option bits
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Options recommending a resume
    pub fn should_resume_options() -> Self {
        Self(Self::SHOULD_RESUME)
    }

    /// Whether the should-resume flag is set
    pub fn should_resume(&self) -> bool {
        self.0 & Self::SHOULD_RESUME != 0
    }

    /// The raw option bits
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}
