//! Recent translation history
//!
//! Keeps the last few successful translations in memory for display on the
//! index page. Nothing is persisted; the list starts empty on every launch.

use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// One completed translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    /// Text as submitted (trimmed)
    pub original: String,
    /// Text as displayed, transliterated for Arabic targets
    pub translated: String,
    /// Display name of the target language
    pub target: String,
    /// Local wall-clock time, `HH:MM`
    pub time: String,
}

impl HistoryRecord {
    /// Build a record stamped with the current local time
    pub fn now(original: &str, translated: &str, target: &str) -> Self {
        Self {
            original: original.to_string(),
            translated: translated.to_string(),
            target: target.to_string(),
            time: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}

/// Bounded, newest-first list of history records
///
/// Safe to share between request handlers. Inserting beyond capacity drops
/// the oldest record.
#[derive(Debug)]
pub struct RecentHistory {
    records: Mutex<VecDeque<HistoryRecord>>,
    capacity: usize,
}

impl RecentHistory {
    /// Number of records kept by default
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
        }
    }

    // A panic while holding the lock cannot leave the deque half-written,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<HistoryRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Prepend a record, evicting the oldest once over capacity
    pub fn insert_front(&self, record: HistoryRecord) {
        let mut records = self.lock();
        records.push_front(record);
        records.truncate(self.capacity);
    }

    /// Snapshot of the records, newest first
    pub fn list(&self) -> Vec<HistoryRecord> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::new()
    }
}
