//! Command-line surface for the `status-history` binary.
//!
//! Argument parsing lives here so `main.rs` only wires logging and exit codes.

use crate::config;
use crate::error::{Result, StatusHistoryError};
use crate::palette::Palette;
use crate::presenter;
use crate::{AppendOutcome, StatusHistory};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Appends one day of HTTP status code counts to the history and prints a
/// Highcharts payload for the Geckoboard API.
#[derive(Debug, Parser)]
#[command(name = "status-history", version, about)]
pub struct Args {
    /// Path to the count file (output of `uniq -c`, optionally gzipped).
    pub filepath: PathBuf,

    /// Path to the history file. Defaults to the platform data directory.
    #[arg(long = "history", value_name = "FILE")]
    pub history_file: Option<PathBuf>,

    /// Geckoboard API key embedded in the payload.
    #[arg(long)]
    pub api_key: String,

    /// Date of these stats, e.g. YYYYMMDD. Defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// Append even if the date already exists in the history.
    #[arg(long)]
    pub force_update: bool,

    /// JSON file of `{"<code>": "<color>"}` overrides for series colors.
    #[arg(long, value_name = "JSON")]
    pub palette: Option<PathBuf>,

    /// Push the payload to this Geckoboard widget as well as printing it.
    #[arg(long)]
    pub widget_key: Option<String>,

    /// Wrap the printed payload in single quotes for use as a shell argument.
    #[arg(long)]
    pub shell_quote: bool,

    /// HTTP timeout in seconds for pushing.
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl Args {
    /// The explicit `--date`, or today's local date as `YYYYMMDD`.
    pub fn resolved_date(&self) -> Result<String> {
        match &self.date {
            Some(date) if date.trim().is_empty() => Err(StatusHistoryError::InvalidArgument(
                "--date must not be empty".to_string(),
            )),
            Some(date) => Ok(date.trim().to_string()),
            None => Ok(chrono::Local::now().format("%Y%m%d").to_string()),
        }
    }

    pub fn build_tracker(&self) -> Result<StatusHistory> {
        let palette = match &self.palette {
            Some(path) => Palette::from_json_file(path)?,
            None => Palette::default(),
        };
        let mut builder = StatusHistory::builder()
            .palette(palette)
            .timeout(Duration::from_secs(self.timeout));
        if let Some(path) = &self.history_file {
            builder = builder.history_path(path);
        }
        Ok(builder.build())
    }
}

/// Run one ingest and return the payload to print.
pub fn run(args: &Args) -> Result<String> {
    let date = args.resolved_date()?;
    let tracker = args.build_tracker()?;

    if args.force_update {
        warn!("using --force-update, this will append data and possibly duplicate");
        warn!(
            "press ^C to cancel (starting in {}s)",
            config::FORCE_UPDATE_GRACE.as_secs()
        );
        std::thread::sleep(config::FORCE_UPDATE_GRACE);
    }

    let run = tracker.ingest_file(&args.filepath, &date, args.force_update)?;
    if run.outcome == AppendOutcome::AppendedWithWarning {
        warn!(date = %date, "chart now repeats this date");
    }

    let payload = presenter::envelope(&args.api_key, &run.chart)?;
    if let Some(widget_key) = &args.widget_key {
        tracker.pusher()?.push(widget_key, &payload)?;
    }

    let rendered = serde_json::to_string(&payload)?;
    Ok(if args.shell_quote {
        presenter::shell_quote(&rendered)
    } else {
        rendered
    })
}
