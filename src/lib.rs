//! Daily HTTP status code history for charting.
//!
//! Each run takes one day's status code counts (the output of a
//! `sort | uniq -c` style pipeline), merges them into a durable date-indexed
//! history file, and pivots the whole history into chart data: dates as
//! categories, one series per status code.
//!
//! # Quick start
//!
//! ```no_run
//! use http_status_history::StatusHistory;
//! use std::path::Path;
//!
//! let tracker = StatusHistory::builder()
//!     .history_path("/var/lib/status/history.json")
//!     .build();
//!
//! let run = tracker.ingest_file(Path::new("counts.txt"), "20141210", false).unwrap();
//! for series in &run.chart.series {
//!     println!("{}: {:?}", series.code, series.points);
//! }
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod palette;
pub mod presenter;
pub mod store;

pub use error::{Result, StatusHistoryError};
pub use models::{AppendOutcome, ChartData, DailyRecord, DateEntry, History, Series};
pub use palette::Palette;
pub use store::HistoryStore;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// StatusHistoryBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StatusHistory`].
///
/// Use [`StatusHistory::builder()`] to obtain one.
pub struct StatusHistoryBuilder {
    history_path: Option<PathBuf>,
    palette: Palette,
    timeout: Duration,
}

impl Default for StatusHistoryBuilder {
    fn default() -> Self {
        Self {
            history_path: None,
            palette: Palette::default(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl StatusHistoryBuilder {
    /// Set the history file location.
    ///
    /// If not set, [`config::default_history_path`] is used.
    pub fn history_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.history_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replace the code to color mapping used for series.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the HTTP timeout used when pushing charts.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the tracker. No files are touched until the first call that
    /// needs the history.
    pub fn build(self) -> StatusHistory {
        StatusHistory {
            store: HistoryStore::new(self.history_path),
            palette: self.palette,
            timeout: self.timeout,
        }
    }
}

// ---------------------------------------------------------------------------
// StatusHistory
// ---------------------------------------------------------------------------

/// Output of one ingest run.
#[derive(Debug, Clone)]
pub struct Ingested {
    pub history: History,
    pub outcome: AppendOutcome,
    pub chart: ChartData,
}

/// Ties the history store, the palette and the pivot together.
pub struct StatusHistory {
    store: HistoryStore,
    palette: Palette,
    timeout: Duration,
}

impl StatusHistory {
    /// Create a new builder.
    pub fn builder() -> StatusHistoryBuilder {
        StatusHistoryBuilder::default()
    }

    /// Merge one day's records into the history and chart the result.
    ///
    /// The merged history is charted before it is saved, so a non-numeric
    /// count anywhere in it fails the run and leaves the store as it was.
    pub fn ingest(&self, date: &str, records: Vec<DailyRecord>, force: bool) -> Result<Ingested> {
        if date.trim().is_empty() {
            return Err(StatusHistoryError::InvalidArgument(
                "date must not be empty".to_string(),
            ));
        }

        let (history, outcome) = self.store.merge(date, records, force)?;
        let chart = aggregate::pivot(history.entries(), &self.palette)?;
        if outcome.is_modified() {
            self.store.save(&history)?;
        }
        Ok(Ingested {
            history,
            outcome,
            chart,
        })
    }

    /// Read a count file and [`ingest`](Self::ingest) it under `date`.
    pub fn ingest_file(&self, path: &Path, date: &str, force: bool) -> Result<Ingested> {
        let records = input::read_counts(path)?;
        self.ingest(date, records, force)
    }

    /// Load the stored history.
    pub fn history(&self) -> Result<History> {
        self.store.load()
    }

    /// Chart the stored history without modifying it.
    pub fn chart(&self) -> Result<ChartData> {
        let history = self.store.load()?;
        aggregate::pivot(history.entries(), &self.palette)
    }

    /// A pusher configured with this tracker's timeout.
    pub fn pusher(&self) -> Result<presenter::Pusher> {
        presenter::Pusher::new(self.timeout)
    }

    /// Return a reference to the underlying [`HistoryStore`].
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Return the palette series colors are drawn from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StatusHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StatusHistory(history={}, timeout={}s)",
            self.store.path.display(),
            self.timeout.as_secs()
        )
    }
}
