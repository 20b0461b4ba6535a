//! Generic Append-Only Log Library
//!
//! A type-safe, generic event log with change notification and blocking
//! iteration patterns.
//!
//! # Features
//!
//! - **Append-Only Storage**: Entries are never mutated or removed
//! - **Strict Ordering**: Insertion order equals chronological order
//! - **Change Notification**: Every append emits an event for observers
//! - **Blocking Iteration**: Consume append events via blocking iterators
//! - **Generic Entries**: Store any `Clone + Send + Sync` value
//!
//! # Quick Start
//!
//! ```rust
//! use log_store::LogStore;
//!
//! // Create a store holding string rows
//! let store = LogStore::new();
//!
//! // Append entries; each returns its index
//! let index = store.append("App Started".to_string());
//! assert_eq!(index, 0);
//!
//! // Snapshot the ordered sequence for rendering
//! let rows = store.snapshot();
//! assert_eq!(rows, vec!["App Started".to_string()]);
//! ```
//!
//! # Iteration Patterns
//!
//! ```rust,ignore
//! // Blocking iteration (waits for events)
//! for event in store.iter() {
//!     println!("appended at index {}", event.index);
//! }
//!
//! // Non-blocking (processes available events)
//! for event in store.iter().try_iter() {
//!     println!("Event: {:?}", event);
//! }
//!
//! // With timeout
//! use std::time::Duration;
//! if let Some(event) = store.iter().recv_timeout(Duration::from_secs(1)) {
//!     println!("Got event: {:?}", event);
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! LogStore<E>
//!     │
//!     ├── entries: Vec<E> (append-only)
//!     │
//!     └── event_channel: mpsc::channel<AppendEvent>
//!             │
//!             └── AppendIterator
//! ```

// Modules
pub mod event;
pub mod iter;
pub mod store;

// Re-exports - Public API
pub use event::AppendEvent;
pub use iter::{AppendIterator, TimeoutIter, TryIter};
pub use store::LogStore;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::event::AppendEvent;
    pub use crate::iter::AppendIterator;
    pub use crate::store::LogStore;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_full_workflow() {
        // Create store
        let store = LogStore::new();
        let iter = store.iter();

        // Append some rows
        store.append("first".to_string());
        store.append("second".to_string());

        // Verify order
        assert_eq!(
            store.snapshot(),
            vec!["first".to_string(), "second".to_string()]
        );

        // Verify events
        let event = iter.recv_timeout(Duration::from_millis(100)).unwrap();
        assert_eq!(event.index, 0);
        let event = iter.recv_timeout(Duration::from_millis(100)).unwrap();
        assert_eq!(event.index, 1);
    }

    #[test]
    fn test_observer_sees_appends_from_clone() {
        let store = LogStore::new();
        let iter = store.iter();

        let producer = store.clone();
        producer.append(42);

        let event = iter.recv_timeout(Duration::from_millis(100)).unwrap();
        assert_eq!(store.get(event.index), Some(42));
    }
}
