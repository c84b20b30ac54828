//! Trace input for the annotator.
//!
//! A trace is the heart-rate CSV handed to the tool by the assessment
//! harness: one header record followed by `RecordTime,F1` data rows.

pub mod reader;
pub mod types;

// Re-export commonly used types
pub use reader::{load_trace, read_trace, TraceError};
pub use types::TraceRow;
