use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StatusHistoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed input at {}:{line}: expected `<count> <code>`, got {content:?}", .path.display())]
    MalformedInput {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Invalid count {count:?} for code {code} on {date}")]
    InvalidCount {
        date: String,
        code: String,
        count: String,
    },

    #[error("Corrupt history store {}: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("History store {} has schema version {found}, expected {expected}", .path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, StatusHistoryError>;
