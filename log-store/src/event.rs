//! Append events for log updates
//!
//! Every append to a `LogStore` emits an `AppendEvent` containing the
//! index of the new entry. Observers use the index to look up the entry
//! (or re-snapshot the whole log) after receiving the event.

use std::time::Instant;

/// An event emitted when an entry is appended to the log
///
/// Events only carry the entry's index, not the entry itself. Use
/// `LogStore::get()` or `LogStore::snapshot()` to read the data after
/// receiving an event.
///
/// # Example
///
/// ```rust,ignore
/// for event in store.iter() {
///     if let Some(entry) = store.get(event.index) {
///         println!("appended at {}: {:?}", event.index, entry);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AppendEvent {
    /// Index of the appended entry (insertion order == chronological order)
    pub index: usize,

    /// When the append was performed
    pub timestamp: Instant,
}

impl AppendEvent {
    /// Create a new append event
    pub fn new(index: usize) -> Self {
        Self {
            index,
            timestamp: Instant::now(),
        }
    }

    /// Create a new append event with a specific timestamp
    pub fn with_timestamp(index: usize, timestamp: Instant) -> Self {
        Self { index, timestamp }
    }
}

impl PartialEq for AppendEvent {
    fn eq(&self, other: &Self) -> bool {
        // Timestamp not included in equality
        self.index == other.index
    }
}
