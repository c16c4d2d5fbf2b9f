//! Shared fixtures for the integration tests.
//!
//! Provides temp-dir backed stores and helpers for writing count files.

#![allow(dead_code)]

use http_status_history::{DailyRecord, HistoryStore};
use std::fs;
use std::path::PathBuf;

/// Create a `HistoryStore` pointing at a not-yet-existing file inside a fresh
/// temp dir.
///
/// Returns `(HistoryStore, tempfile::TempDir)`. Keep the `TempDir` alive for
/// the duration of the test.
pub fn temp_store() -> (HistoryStore, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(Some(tmp_dir.path().join("history.json")));
    (store, tmp_dir)
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Build records from `(count, code)` pairs, in the order a count file lists
/// them.
pub fn records(pairs: &[(&str, &str)]) -> Vec<DailyRecord> {
    pairs
        .iter()
        .map(|(count, code)| DailyRecord::new(*code, *count))
        .collect()
}
