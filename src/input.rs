//! Count file reader.
//!
//! Parses the output of a `sort | uniq -c` style pipeline: one `<count> <code>`
//! pair per line. Files ending in `.gz` are decompressed transparently.
//!
//! Blank lines are ignored. Any other line that does not split into exactly two
//! whitespace-separated fields fails the whole read with
//! [`StatusHistoryError::MalformedInput`], so a bad file never reaches the store.

use crate::error::{Result, StatusHistoryError};
use crate::models::DailyRecord;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Read all records from a count file, in file order.
pub fn read_counts(path: &Path) -> Result<Vec<DailyRecord>> {
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let records = parse_counts(BufReader::new(reader), path)?;
    debug!(path = %path.display(), records = records.len(), "read count file");
    Ok(records)
}

/// Parse `<count> <code>` lines from any buffered reader.
///
/// `origin` is only used in error messages.
pub fn parse_counts<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<DailyRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [count, code] => records.push(DailyRecord::new(*code, *count)),
            _ => {
                return Err(StatusHistoryError::MalformedInput {
                    path: origin.to_path_buf(),
                    line: idx + 1,
                    content: line.clone(),
                })
            }
        }
    }

    Ok(records)
}
