//! Report assembly for the annotator.
//!
//! A report is a header line echoing the harness arguments, eight
//! annotation lines derived from six randomly sampled trace rows, and a
//! `Data End` footer. Everything downstream of the random draw is
//! deterministic, so a seeded rng reproduces a report exactly.

pub mod annotate;
pub mod sampler;

// Re-export commonly used types
pub use annotate::{annotate, Annotation, AnnotationKind, SAMPLES_PER_REPORT};
pub use sampler::sample_indices;

use crate::trace::TraceRow;
use rand::Rng;

/// Errors that can occur while building a report.
#[derive(Debug)]
pub enum ReportError {
    EmptyTrace,
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::EmptyTrace => write!(f, "Trace has no data rows to sample"),
        }
    }
}

impl std::error::Error for ReportError {}

/// The four harness arguments echoed in the report header.
#[derive(Debug, Clone)]
pub struct DataName {
    pub hr: String,
    pub uc: String,
    pub settings: String,
    pub bpm: String,
}

impl DataName {
    /// Render the header line, echoing all four arguments verbatim.
    pub fn header_line(&self) -> String {
        format!(
            "Data Name: {} {} {} {}",
            self.hr, self.uc, self.settings, self.bpm
        )
    }
}

/// Footer line terminating the report.
pub const FOOTER: &str = "Data End";

/// Build the full report as printable lines, header and footer included.
pub fn build_report<R: Rng>(
    data_name: &DataName,
    rows: &[TraceRow],
    rng: &mut R,
    window_millis: i64,
) -> Result<Vec<String>, ReportError> {
    if rows.is_empty() {
        return Err(ReportError::EmptyTrace);
    }

    let indices = sample_indices(rng, rows.len(), SAMPLES_PER_REPORT);
    log::debug!("sampled row indices: {indices:?}");

    let mut lines = Vec::with_capacity(SAMPLES_PER_REPORT + 4);
    lines.push(data_name.header_line());
    lines.extend(
        annotate(rows, &indices, window_millis)
            .iter()
            .map(Annotation::render),
    );
    lines.push(FOOTER.to_string());

    Ok(lines)
}
