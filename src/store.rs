//! Durable, date-indexed history store.
//!
//! The history lives in a single versioned JSON file:
//!
//! ```json
//! {
//!   "version": 1,
//!   "index": ["20141210", "20141211"],
//!   "data": [
//!     {"date": "20141210", "records": [{"code": "200", "count": "7"}]},
//!     {"date": "20141211", "records": [{"code": "200", "count": "9"}]}
//!   ]
//! }
//! ```
//!
//! Writes go to a temp file in the same directory which is then renamed over
//! the store, so an interrupted run leaves either the old or the new history
//! on disk and never a mix of the two.

use crate::config;
use crate::error::{Result, StatusHistoryError};
use crate::models::{AppendOutcome, DailyRecord, DateEntry, History};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

#[derive(Serialize)]
struct StoreFileRef<'a> {
    version: u32,
    #[serde(flatten)]
    history: &'a History,
}

#[derive(Deserialize)]
struct StoreFile {
    #[allow(dead_code)]
    version: u32,
    #[serde(flatten)]
    history: History,
}

/// Merge one day's records into `history`.
///
/// Returns the updated history together with what happened. `history` itself
/// is never modified; on [`AppendOutcome::SkippedDuplicate`] the returned
/// history is an unchanged copy.
pub fn append(
    history: &History,
    date: &str,
    records: Vec<DailyRecord>,
    force: bool,
) -> (History, AppendOutcome) {
    if !history.contains(date) {
        let next = history.with_entry(DateEntry::new(date, records));
        return (next, AppendOutcome::Appended);
    }
    if !force {
        return (history.clone(), AppendOutcome::SkippedDuplicate);
    }
    let next = history.with_entry(DateEntry::new(date, records));
    (next, AppendOutcome::AppendedWithWarning)
}

/// File-backed history store.
///
/// The store does no locking. Only one process may use a given path at a
/// time.
pub struct HistoryStore {
    /// Location of the history file.
    pub path: PathBuf,
}

impl HistoryStore {
    /// Create a store rooted at `path`.
    ///
    /// If `path` is `None`, uses [`config::default_history_path`]. Nothing is
    /// read or created until [`load`](Self::load) or [`save`](Self::save).
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(config::default_history_path),
        }
    }

    /// Read the full history.
    ///
    /// A missing file yields an empty history. A file that exists but cannot
    /// be decoded is an error; it is left untouched so nothing is lost.
    pub fn load(&self) -> Result<History> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no history store yet, starting empty");
                return Ok(History::new());
            }
            Err(e) => return Err(e.into()),
        };

        let value: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| self.corrupt(e.to_string()))?;

        let version = value
            .get("version")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| self.corrupt("missing or non-numeric \"version\" field"))?;
        if version != u64::from(config::STORE_VERSION) {
            return Err(StatusHistoryError::UnsupportedVersion {
                path: self.path.clone(),
                found: u32::try_from(version).unwrap_or(u32::MAX),
                expected: config::STORE_VERSION,
            });
        }

        let file: StoreFile =
            serde_json::from_value(value).map_err(|e| self.corrupt(e.to_string()))?;
        file.history
            .check_consistency()
            .map_err(|reason| self.corrupt(reason))?;

        debug!(path = %self.path.display(), entries = file.history.len(), "loaded history");
        Ok(file.history)
    }

    /// Persist `history`, replacing whatever is on disk.
    pub fn save(&self, history: &History) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        let file = StoreFileRef {
            version: config::STORE_VERSION,
            history,
        };
        serde_json::to_writer_pretty(&mut tmp, &file)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), entries = history.len(), "saved history");
        Ok(())
    }

    /// Load and merge one day's records without writing anything.
    ///
    /// Duplicate dates are reported as warnings, not errors. Callers that
    /// need to validate the merged history before it is persisted pass the
    /// result to [`save`](Self::save) themselves when
    /// [`AppendOutcome::is_modified`] holds.
    pub fn merge(
        &self,
        date: &str,
        records: Vec<DailyRecord>,
        force: bool,
    ) -> Result<(History, AppendOutcome)> {
        let history = self.load()?;
        let (next, outcome) = append(&history, date, records, force);

        match outcome {
            AppendOutcome::Appended => {
                info!(date, "appended new date to history");
            }
            AppendOutcome::SkippedDuplicate => {
                warn!(date, "did not append, date already present in history");
            }
            AppendOutcome::AppendedWithWarning => {
                warn!(date, "writing duplicate entry for date already in history");
            }
        }

        Ok((next, outcome))
    }

    /// Load, merge one day's records, and write back.
    ///
    /// When the date is skipped the store is not rewritten.
    pub fn update(
        &self,
        date: &str,
        records: Vec<DailyRecord>,
        force: bool,
    ) -> Result<(History, AppendOutcome)> {
        let (next, outcome) = self.merge(date, records, force)?;
        if outcome.is_modified() {
            self.save(&next)?;
        }
        Ok((next, outcome))
    }

    /// Whether a history file exists at the store path.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn corrupt(&self, reason: impl Into<String>) -> StatusHistoryError {
        StatusHistoryError::CorruptStore {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(None)
    }
}

