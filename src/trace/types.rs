//! Row types for CTG trace input.

/// One sample from a CTG heart-rate trace.
///
/// The upstream exporter writes rows as `RecordTime,F1`: an epoch-millis
/// timestamp followed by the heart-rate reading. The reading is kept as an
/// opaque string because the report echoes it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRow {
    /// Observation time in milliseconds since the Unix epoch
    pub record_time: i64,
    /// Heart-rate reading, echoed verbatim into annotations
    pub value: String,
}

impl TraceRow {
    pub fn new(record_time: i64, value: impl Into<String>) -> Self {
        Self {
            record_time,
            value: value.into(),
        }
    }
}
