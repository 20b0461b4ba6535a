//! Audio route model
//!
//! A route is the set of active audio hardware endpoints. Route change
//! notifications carry a reason code and, when a device disappears, a
//! description of the previous route.

use serde::{Deserialize, Serialize};

/// Classification of an audio output port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortType {
    /// Wired headphones or headset
    Headphones,
    /// Bluetooth A2DP audio device
    BluetoothA2dp,
    /// Device built-in speaker
    BuiltInSpeaker,
    /// Device built-in earpiece receiver
    BuiltInReceiver,
    /// Line-level analog output
    LineOut,
    /// AirPlay streaming target
    AirPlay,
    /// USB audio interface
    UsbAudio,
}

impl PortType {
    /// Whether the host audio subsystem classifies this port as headphones
    pub fn is_headphones(&self) -> bool {
        matches!(self, PortType::Headphones)
    }
}

/// A single audio output endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioPort {
    /// Port classification
    pub port_type: PortType,
    /// Human-readable port name
    pub name: String,
}

impl AudioPort {
    /// Create a new audio port
    pub fn new(port_type: PortType, name: impl Into<String>) -> Self {
        Self {
            port_type,
            name: name.into(),
        }
    }
}

/// The set of active output endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioRoute {
    /// Active output ports
    pub outputs: Vec<AudioPort>,
}

impl AudioRoute {
    /// Create a route from its output ports
    pub fn new(outputs: Vec<AudioPort>) -> Self {
        Self { outputs }
    }

    /// Whether any output port is headphone-class
    pub fn has_headphones(&self) -> bool {
        self.outputs.iter().any(|port| port.port_type.is_headphones())
    }
}

/// Reason code attached to a route change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteChangeReason {
    /// Reason could not be determined
    Unknown,
    /// A new output device became available
    NewDeviceAvailable,
    /// A previously available output device disappeared
    OldDeviceUnavailable,
    /// The session category changed
    CategoryChange,
    /// The app overrode the output route
    Override,
    /// The device woke from sleep
    WakeFromSleep,
    /// No route was suitable for the current category
    NoSuitableRouteForCategory,
    /// The route configuration changed without a device change
    RouteConfigurationChange,
}

impl RouteChangeReason {
    /// Decode from the host's raw notification value
    ///
    /// Returns `None` for values outside the host's numbering; callers
    /// drop such notifications.
    pub fn from_raw(raw: u64) -> Option<Self> {
        match raw {
            0 => Some(RouteChangeReason::Unknown),
            1 => Some(RouteChangeReason::NewDeviceAvailable),
            2 => Some(RouteChangeReason::OldDeviceUnavailable),
            3 => Some(RouteChangeReason::CategoryChange),
            4 => Some(RouteChangeReason::Override),
            6 => Some(RouteChangeReason::WakeFromSleep),
            7 => Some(RouteChangeReason::NoSuitableRouteForCategory),
            8 => Some(RouteChangeReason::RouteConfigurationChange),
            _ => None,
        }
    }

    /// The host's raw value for this reason
    pub fn as_raw(&self) -> u64 {
        match self {
            RouteChangeReason::Unknown => 0,
            RouteChangeReason::NewDeviceAvailable => 1,
            RouteChangeReason::OldDeviceUnavailable => 2,
            RouteChangeReason::CategoryChange => 3,
            RouteChangeReason::Override => 4,
            RouteChangeReason::WakeFromSleep => 6,
            RouteChangeReason::NoSuitableRouteForCategory => 7,
            RouteChangeReason::RouteConfigurationChange => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_headphones() {
        let route = AudioRoute::new(vec![
            AudioPort::new(PortType::BuiltInSpeaker, "Speaker"),
            AudioPort::new(PortType::Headphones, "Wired Headphones"),
        ]);
        assert!(route.has_headphones());
    }

    #[test]
    fn test_no_headphones() {
        let route = AudioRoute::new(vec![
            AudioPort::new(PortType::BuiltInSpeaker, "Speaker"),
            AudioPort::new(PortType::BluetoothA2dp, "Car Stereo"),
        ]);
        assert!(!route.has_headphones());
    }

    #[test]
    fn test_empty_route() {
        assert!(!AudioRoute::default().has_headphones());
    }

    #[test]
    fn test_bluetooth_is_not_headphone_class() {
        // Only wired headphones carry the headphone classification
        assert!(!PortType::BluetoothA2dp.is_headphones());
        assert!(PortType::Headphones.is_headphones());
    }

    #[test]
    fn test_reason_from_raw() {
        assert_eq!(
            RouteChangeReason::from_raw(1),
            Some(RouteChangeReason::NewDeviceAvailable)
        );
        assert_eq!(
            RouteChangeReason::from_raw(2),
            Some(RouteChangeReason::OldDeviceUnavailable)
        );
    }

    #[test]
    fn test_reason_from_raw_unrecognized() {
        // 5 is unassigned in the host numbering
        assert_eq!(RouteChangeReason::from_raw(5), None);
        assert_eq!(RouteChangeReason::from_raw(9), None);
    }

    #[test]
    fn test_reason_raw_roundtrip() {
        for raw in [0, 1, 2, 3, 4, 6, 7, 8] {
            let reason = RouteChangeReason::from_raw(raw).unwrap();
            assert_eq!(reason.as_raw(), raw);
        }
    }
}
