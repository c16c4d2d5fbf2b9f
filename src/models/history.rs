use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::DateEntry;

// ---------------------------------------------------------------------------
// History — Durable log of date entries plus a seen-dates index
// ---------------------------------------------------------------------------

/// The durable, append-only log of [`DateEntry`] values.
///
/// `index` holds every date present in `entries`, and nothing else. The
/// fields are private so the only way to grow a history is
/// [`store::append`](crate::store::append), which keeps both in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    index: BTreeSet<String>,
    #[serde(rename = "data")]
    entries: Vec<DateEntry>,
}

impl History {
    /// An empty history, as bootstrapped on first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `date` has already been recorded.
    pub fn contains(&self, date: &str) -> bool {
        self.index.contains(date)
    }

    /// Entries in append order. A date may appear more than once if it was
    /// force-appended.
    pub fn entries(&self) -> &[DateEntry] {
        &self.entries
    }

    /// Distinct recorded dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.index.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return a copy of this history with `entry` appended and its date indexed.
    pub(crate) fn with_entry(&self, entry: DateEntry) -> Self {
        let mut next = self.clone();
        next.index.insert(entry.date.clone());
        next.entries.push(entry);
        next
    }

    /// Check that `index` and `entries` describe the same set of dates.
    ///
    /// Returns a description of the first mismatch found.
    pub fn check_consistency(&self) -> std::result::Result<(), String> {
        let seen: BTreeSet<&str> = self.entries.iter().map(|e| e.date.as_str()).collect();
        if let Some(orphan) = self.index.iter().find(|d| !seen.contains(d.as_str())) {
            return Err(format!("index lists date {orphan} with no matching entry"));
        }
        if let Some(missing) = seen.iter().find(|d| !self.index.contains(**d)) {
            return Err(format!("entry for date {missing} is missing from the index"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// AppendOutcome — What a merge did
// ---------------------------------------------------------------------------

/// Result of merging one [`DateEntry`] into a [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The date was new and has been appended.
    Appended,
    /// The date was already present and `force` was off; nothing changed.
    SkippedDuplicate,
    /// The date was already present and has been appended again because
    /// `force` was on.
    AppendedWithWarning,
}

impl AppendOutcome {
    /// Whether the history changed and needs to be written back.
    pub fn is_modified(self) -> bool {
        !matches!(self, AppendOutcome::SkippedDuplicate)
    }
}
