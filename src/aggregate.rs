//! Pivot a date-major history into code-major chart series.
//!
//! Entries are sorted by date (stably, so forced duplicates keep their append
//! order) and every entry contributes one category. Each record then pushes
//! its count onto the series for its code.
//!
//! Two behaviors are deliberate:
//!
//! - A code missing on some date gets no placeholder for that date. Its series
//!   is shorter than `categories` and no longer lines up with it positionally.
//! - A force-appended date shows up once per entry in `categories`, and its
//!   counts are appended again rather than summed.

use crate::error::{Result, StatusHistoryError};
use crate::models::{ChartData, DateEntry, Series};
use crate::palette::Palette;
use std::collections::HashMap;

/// Build chart data from history entries.
///
/// Series appear in the order their codes are first seen while scanning the
/// sorted entries. Fails if a stored count is not a non-negative integer.
pub fn pivot(entries: &[DateEntry], palette: &Palette) -> Result<ChartData> {
    let mut sorted: Vec<&DateEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut categories = Vec::with_capacity(sorted.len());
    let mut order: Vec<&str> = Vec::new();
    let mut points: HashMap<&str, Vec<u64>> = HashMap::new();

    for entry in sorted {
        categories.push(entry.date.clone());
        for record in &entry.records {
            let count = parse_count(&record.count).ok_or_else(|| {
                StatusHistoryError::InvalidCount {
                    date: entry.date.clone(),
                    code: record.code.clone(),
                    count: record.count.clone(),
                }
            })?;
            points
                .entry(record.code.as_str())
                .or_insert_with(|| {
                    order.push(record.code.as_str());
                    Vec::new()
                })
                .push(count);
        }
    }

    let series = order
        .into_iter()
        .map(|code| Series {
            code: code.to_string(),
            color: palette.color_for(code).to_string(),
            points: points.remove(code).unwrap_or_default(),
        })
        .collect();

    Ok(ChartData { categories, series })
}

fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
