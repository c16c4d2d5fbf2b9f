use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Schema version written into every history store.
pub const STORE_VERSION: u32 = 1;

pub const PUSH_BASE: &str = "https://push.geckoboard.com/v1/send";

/// Color used for status codes missing from the palette.
pub const DEFAULT_COLOR: &str = "#fff";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How long `--force-update` waits before touching the store, so an operator
/// can still hit ^C.
pub const FORCE_UPDATE_GRACE: Duration = Duration::from_secs(1);

pub fn default_palette() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("200", "#6FB665"),
        ("204", "#4FA29F"),
        ("400", "#D8C726"),
        ("404", "#F06A2A"),
        ("406", "#78CAEF"),
        ("414", "#86F6D2"),
        ("500", "#043E8A"),
        ("502", "#A81E03"),
    ])
}

pub fn default_history_path() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("http-status-history").join("history.json")
    } else {
        PathBuf::from(".http-status-history").join("history.json")
    }
}
