//! Status code to chart color mapping.

use crate::config;
use crate::error::{Result, StatusHistoryError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Maps status codes to series colors.
///
/// Codes without an entry get [`default_color`](Self::default_color), so an
/// unexpected status code still gets a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<String, String>,
    default_color: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: config::default_palette()
                .into_iter()
                .map(|(code, color)| (code.to_string(), color.to_string()))
                .collect(),
            default_color: config::DEFAULT_COLOR.to_string(),
        }
    }
}

impl Palette {
    /// A palette with no entries; every code gets `default_color`.
    pub fn empty(default_color: impl Into<String>) -> Self {
        Self {
            colors: HashMap::new(),
            default_color: default_color.into(),
        }
    }

    /// Set or replace the color for `code`.
    pub fn with(mut self, code: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(code.into(), color.into());
        self
    }

    /// The default palette with overrides read from a JSON object file of
    /// `{"<code>": "<color>"}` pairs.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let overrides: HashMap<String, String> =
            serde_json::from_str(&contents).map_err(|e| {
                StatusHistoryError::InvalidArgument(format!(
                    "palette file {} must be a JSON object of code to color: {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(overrides
            .into_iter()
            .fold(Self::default(), |palette, (code, color)| palette.with(code, color)))
    }

    pub fn color_for(&self, code: &str) -> &str {
        self.colors
            .get(code)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }
}
