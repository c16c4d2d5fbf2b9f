use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DailyRecord — One status code observation from a count file
// ---------------------------------------------------------------------------

/// A single `<count> <code>` line.
///
/// Both fields stay as strings. Status codes are keyed as strings, and the
/// count is only parsed when the history is pivoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub code: String,
    pub count: String,
}

impl DailyRecord {
    pub fn new(code: impl Into<String>, count: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            count: count.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// DateEntry — One day's full set of observations
// ---------------------------------------------------------------------------

/// All records collected for one date.
///
/// The date is an opaque key. Callers pick a format (e.g. `YYYYMMDD`) whose
/// lexicographic order matches chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    pub date: String,
    pub records: Vec<DailyRecord>,
}

impl DateEntry {
    pub fn new(date: impl Into<String>, records: Vec<DailyRecord>) -> Self {
        Self {
            date: date.into(),
            records,
        }
    }
}
