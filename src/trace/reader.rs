//! CSV reading for CTG traces.
//!
//! The first record of a trace file is a header and is discarded without
//! validation. Every data record needs at least two fields: an epoch-millis
//! timestamp and the heart-rate value. Extra fields are ignored.

use crate::trace::types::TraceRow;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Errors that can occur while reading a trace.
#[derive(Debug)]
pub enum TraceError {
    Io(String),
    Csv { line: u64, message: String },
    MissingField { line: u64 },
    InvalidTimestamp { line: u64, value: String },
}

impl std::fmt::Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::Io(e) => write!(f, "IO error: {e}"),
            TraceError::Csv { line, message } => {
                write!(f, "CSV error at line {line}: {message}")
            }
            TraceError::MissingField { line } => {
                write!(f, "Line {line} has fewer than 2 fields")
            }
            TraceError::InvalidTimestamp { line, value } => {
                write!(f, "Invalid timestamp '{value}' at line {line}")
            }
        }
    }
}

impl std::error::Error for TraceError {}

/// Read a trace from a file path.
pub fn load_trace(path: &Path, lenient: bool) -> Result<Vec<TraceRow>, TraceError> {
    let file =
        File::open(path).map_err(|e| TraceError::Io(format!("{}: {e}", path.display())))?;
    read_trace(file, lenient)
}

/// Read a trace from any reader, skipping the header record.
///
/// With `lenient` set, malformed data records are skipped with a warning
/// instead of aborting the read.
pub fn read_trace<R: Read>(reader: R, lenient: bool) -> Result<Vec<TraceRow>, TraceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in csv_reader.records() {
        let parsed = match result {
            Ok(record) => {
                let line = record.position().map_or(0, |p| p.line());
                parse_record(&record, line)
            }
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                Err(TraceError::Csv {
                    line,
                    message: e.to_string(),
                })
            }
        };

        match parsed {
            Ok(row) => rows.push(row),
            Err(e) if lenient => {
                log::warn!("skipping trace row: {e}");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        log::info!("skipped {skipped} malformed trace rows");
    }

    Ok(rows)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<TraceRow, TraceError> {
    let raw_time = record
        .get(0)
        .filter(|s| !s.is_empty())
        .ok_or(TraceError::MissingField { line })?;
    let value = record.get(1).ok_or(TraceError::MissingField { line })?;

    let record_time = raw_time
        .parse::<i64>()
        .ok()
        .filter(|t| *t >= 0)
        .ok_or_else(|| TraceError::InvalidTimestamp {
            line,
            value: raw_time.to_string(),
        })?;

    Ok(TraceRow::new(record_time, value))
}
