//! Append-only log storage
//!
//! This module provides the core storage primitive: `LogStore<E>`, an
//! ordered, append-only sequence of entries with change notification.

use std::sync::{mpsc, Arc, Mutex, PoisonError, RwLock};

use crate::event::AppendEvent;
use crate::iter::AppendIterator;

/// Generic append-only log with change notification
///
/// The store is generic over the entry type, allowing it to hold any
/// cloneable value. Entries are never mutated or removed after creation;
/// the sequence is strictly append-ordered, so insertion order equals
/// chronological order.
///
/// Clones of a `LogStore` share the same underlying state, so a store
/// can be handed to producers and renderers alike. Appends take a write
/// lock, which keeps the sequence consistent even when entries arrive
/// from multiple threads.
///
/// # Example
///
/// ```rust
/// use log_store::LogStore;
///
/// let store = LogStore::new();
///
/// let first = store.append("started".to_string());
/// assert_eq!(first, 0);
///
/// store.append("stopped".to_string());
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.snapshot(), vec!["started".to_string(), "stopped".to_string()]);
/// ```
pub struct LogStore<E>
where
    E: Clone + Send + Sync + 'static,
{
    /// Ordered entry storage
    entries: Arc<RwLock<Vec<E>>>,

    /// Channel sender for append events
    event_tx: mpsc::Sender<AppendEvent>,

    /// Channel receiver for append events (wrapped for cloning)
    event_rx: Arc<Mutex<mpsc::Receiver<AppendEvent>>>,
}

impl<E> LogStore<E>
where
    E: Clone + Send + Sync + 'static,
{
    /// Create a new empty log store
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            event_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Append an entry to the end of the log, returning its index
    ///
    /// Appends never reorder, drop, or duplicate entries. Every append
    /// emits an `AppendEvent` observable via `iter()`.
    pub fn append(&self, entry: E) -> usize {
        let index = {
            // A poisoned lock still holds a consistent list; recover it
            // rather than losing the entry.
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            entries.push(entry);
            entries.len() - 1
        };

        let _ = self.event_tx.send(AppendEvent::new(index));
        index
    }

    /// Get a read-only snapshot of the current ordered sequence
    ///
    /// The snapshot is a copy; later appends do not affect it.
    pub fn snapshot(&self) -> Vec<E> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the entry at the given index
    ///
    /// Returns `None` if no entry has been appended at that index yet.
    pub fn get(&self, index: usize) -> Option<E> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(index)
            .cloned()
    }

    /// Get the number of entries in the log
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a blocking iterator over append events
    ///
    /// Emits one event per append, in append order.
    pub fn iter(&self) -> AppendIterator {
        AppendIterator::new(Arc::clone(&self.event_rx))
    }
}

impl<E> Default for LogStore<E>
where
    E: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for LogStore<E>
where
    E: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            event_tx: self.event_tx.clone(),
            event_rx: Arc::clone(&self.event_rx),
        }
    }
}

impl<E> std::fmt::Debug for LogStore<E>
where
    E: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStore")
            .field("entry_count", &self.len())
            .finish()
    }
}
