//! Notification payload mapping
//!
//! Host notifications carry a string-keyed payload map. Values are
//! loosely typed the way the host delivers them: interruption types,
//! option bits, and route change reasons arrive as raw unsigned
//! integers; the previous route arrives as a structured route
//! description.
//!
//! Typed accessors return `None` for a missing key or a wrong-typed
//! value; callers treat that as a malformed notification and drop it.

use std::collections::HashMap;

use crate::route::AudioRoute;

/// Well-known payload keys
pub mod keys {
    /// Raw interruption type (`u64`) - see `InterruptionType::from_raw`
    pub const INTERRUPTION_TYPE: &str = "interruption_type";

    /// Raw interruption option bits (`u64`) - see `InterruptionOptions`
    pub const INTERRUPTION_OPTIONS: &str = "interruption_options";

    /// Raw route change reason (`u64`) - see `RouteChangeReason::from_raw`
    pub const ROUTE_CHANGE_REASON: &str = "route_change_reason";

    /// The route that was active before the change (`AudioRoute`)
    pub const PREVIOUS_ROUTE: &str = "previous_route";
}

/// A single payload value
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    /// Raw unsigned integer, as the host encodes enum-like values
    UInt(u64),

    /// A structured route description
    Route(AudioRoute),
}

/// String-keyed payload map attached to a notification
///
/// # Example
///
/// ```rust
/// use audio_session::{keys, Payload};
///
/// let payload = Payload::new().with_uint(keys::INTERRUPTION_TYPE, 1);
///
/// assert_eq!(payload.uint(keys::INTERRUPTION_TYPE), Some(1));
/// assert_eq!(payload.uint(keys::INTERRUPTION_OPTIONS), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    values: HashMap<String, PayloadValue>,
}

impl Payload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw unsigned integer value (builder style)
    pub fn with_uint(mut self, key: impl Into<String>, value: u64) -> Self {
        self.values.insert(key.into(), PayloadValue::UInt(value));
        self
    }

    /// Set a route value (builder style)
    pub fn with_route(mut self, key: impl Into<String>, route: AudioRoute) -> Self {
        self.values.insert(key.into(), PayloadValue::Route(route));
        self
    }

    /// Read a raw unsigned integer value
    ///
    /// Returns `None` if the key is absent or holds a non-integer value.
    pub fn uint(&self, key: &str) -> Option<u64> {
        match self.values.get(key) {
            Some(PayloadValue::UInt(value)) => Some(*value),
            _ => None,
        }
    }

    /// Read a route value
    ///
    /// Returns `None` if the key is absent or holds a non-route value.
    pub fn route(&self, key: &str) -> Option<&AudioRoute> {
        match self.values.get(key) {
            Some(PayloadValue::Route(route)) => Some(route),
            _ => None,
        }
    }

    /// Check if a key is present, regardless of value type
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of values in the payload
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{AudioPort, PortType};

    #[test]
    fn test_uint_roundtrip() {
        let payload = Payload::new().with_uint(keys::INTERRUPTION_TYPE, 1);
        assert_eq!(payload.uint(keys::INTERRUPTION_TYPE), Some(1));
    }

    #[test]
    fn test_missing_key_reads_none() {
        let payload = Payload::new();
        assert_eq!(payload.uint(keys::ROUTE_CHANGE_REASON), None);
        assert!(payload.route(keys::PREVIOUS_ROUTE).is_none());
    }

    #[test]
    fn test_wrong_type_reads_none() {
        let route = AudioRoute::new(vec![AudioPort::new(PortType::Headphones, "wired")]);
        let payload = Payload::new().with_route(keys::ROUTE_CHANGE_REASON, route);

        // Key present but not a UInt
        assert!(payload.contains(keys::ROUTE_CHANGE_REASON));
        assert_eq!(payload.uint(keys::ROUTE_CHANGE_REASON), None);
    }

    #[test]
    fn test_route_accessor() {
        let route = AudioRoute::new(vec![AudioPort::new(PortType::Headphones, "wired")]);
        let payload = Payload::new().with_route(keys::PREVIOUS_ROUTE, route.clone());

        assert_eq!(payload.route(keys::PREVIOUS_ROUTE), Some(&route));
    }
}
