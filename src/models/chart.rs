use serde::Serialize;

// ---------------------------------------------------------------------------
// ChartData — Pivoted, code-major view of the history
// ---------------------------------------------------------------------------

/// Categories (sorted dates) plus one series per status code.
///
/// Recomputed from the history on every run and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartData {
    /// Look up the series for a status code.
    pub fn series_for(&self, code: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.code == code)
    }
}

// ---------------------------------------------------------------------------
// Series — One line on the chart
// ---------------------------------------------------------------------------

/// Counts for a single status code.
///
/// `points` has one value per date on which the code was observed. A code
/// that is absent on some dates has fewer points than there are categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub code: String,
    pub color: String,
    pub points: Vec<u64>,
}

impl Series {
    /// Display name used in chart legends.
    pub fn name(&self) -> String {
        format!("http {}", self.code)
    }
}
