//! Highcharts payload and Geckoboard push envelope.
//!
//! The chart config is embedded as a JSON *string* inside the envelope, which
//! is the shape the Geckoboard Highcharts widget expects:
//!
//! ```json
//! {"api_key": "...", "data": {"highchart": "{\"chart\": ...}"}}
//! ```

use crate::config;
use crate::error::{Result, StatusHistoryError};
use crate::models::ChartData;
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;

const TEXT_COLOR: &str = "#b9bbbb";

/// Highcharts config for a line chart of daily status code counts.
pub fn highchart(chart: &ChartData) -> Value {
    let series: Vec<Value> = chart
        .series
        .iter()
        .map(|s| {
            json!({
                "color": s.color,
                "name": s.name(),
                "data": s.points,
            })
        })
        .collect();

    json!({
        "chart": {
            "style": {"color": TEXT_COLOR},
            "renderTo": "container",
            "backgroundColor": "transparent",
            "lineColor": "rgba(35,37,38,100)",
            "plotShadow": false
        },
        "credits": {"enabled": false},
        "title": {
            "style": {"color": TEXT_COLOR},
            "text": "Daily HTTP Status Codes"
        },
        "xAxis": {"categories": chart.categories},
        "yAxis": {"title": {"style": {"color": TEXT_COLOR}, "text": "HTTP Requests"}},
        "legend": {
            "itemStyle": {"color": TEXT_COLOR},
            "layout": "vertical",
            "align": "right",
            "verticalAlign": "middle",
            "borderWidth": 0
        },
        "series": series
    })
}

/// Wrap the chart config in a push envelope for `api_key`.
pub fn envelope(api_key: &str, chart: &ChartData) -> Result<Value> {
    let highchart = serde_json::to_string(&highchart(chart))?;
    Ok(json!({
        "api_key": api_key,
        "data": {"highchart": highchart},
    }))
}

/// Quote `payload` for pasting into a shell as a single argument.
///
/// Embedded single quotes are closed, escaped and reopened (`'\''`).
pub fn shell_quote(payload: &str) -> String {
    format!("'{}'", payload.replace('\'', r"'\''"))
}

/// Sends envelopes to the Geckoboard push API.
pub struct Pusher {
    base_url: String,
    client: Client,
}

impl Pusher {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(config::PUSH_BASE, timeout)
    }

    /// Push to an alternative endpoint, e.g. a local mock.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// URL that a widget's updates are posted to.
    pub fn widget_url(&self, widget_key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), widget_key)
    }

    /// POST `payload` to the widget identified by `widget_key`.
    pub fn push(&self, widget_key: &str, payload: &Value) -> Result<()> {
        if widget_key.trim().is_empty() {
            return Err(StatusHistoryError::InvalidArgument(
                "widget key must not be empty".to_string(),
            ));
        }
        let url = self.widget_url(widget_key);
        self.client.post(&url).json(payload).send()?.error_for_status()?;
        info!(widget = widget_key, "pushed chart to widget");
        Ok(())
    }
}
