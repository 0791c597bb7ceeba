use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 50;
/// `chrono` format of entry timestamps, e.g. `2026-10-17 14:03:59`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One evaluated expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as it was evaluated.
    pub expression: String,
    /// The formatted result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result:     Option<String>,
    /// Local time of the evaluation, in [`TIMESTAMP_FORMAT`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp:  Option<String>,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current local time.
    #[must_use]
    pub fn now(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self { expression: expression.into(),
               result:     Some(result.into()),
               timestamp:  Some(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()), }
    }
}

/// A bounded list of entries, newest first.
///
/// Adding an entry to a full history drops the oldest one.
///
/// # Example
/// ```
/// use reckon::session::history::{History, HistoryEntry};
///
/// let mut history = History::new(2);
/// history.push(HistoryEntry::now("1+1", "2"));
/// history.push(HistoryEntry::now("2+2", "4"));
/// history.push(HistoryEntry::now("3+3", "6"));
///
/// let expressions: Vec<_> = history.iter().map(|e| e.expression.as_str()).collect();
/// assert_eq!(expressions, ["3+3", "2+2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries:  VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    /// Creates an empty history holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity),
               capacity }
    }

    /// Creates a history from stored entries, newest first, keeping at most
    /// `capacity` of them.
    #[must_use]
    pub fn from_entries(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut entries = VecDeque::from(entries);
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Adds an entry as the newest one.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// The entry at `index`, where `0` is the newest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterates from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copies the entries out, newest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}
