//! Positional annotation template for sampled trace rows.
//!
//! The report always has the same shape: three accelerations and three
//! baselines, two of which also carry a risk line. Which label a sampled
//! row gets depends only on its ordinal position in the sorted sample,
//! never on the row's contents.

use crate::trace::TraceRow;

/// Kind of annotation line emitted in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Acceleration,
    BaselineNormal,
    Risk,
}

impl AnnotationKind {
    /// Label text understood by the consuming harness.
    pub fn label(self) -> &'static str {
        match self {
            AnnotationKind::Acceleration => "Acceleration",
            AnnotationKind::BaselineNormal => "Baseline-NORMAL",
            AnnotationKind::Risk => "Risk",
        }
    }
}

/// One labeled time window attached to a sampled row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Window start, the sampled row's record time
    pub begin: i64,
    /// Window end, `begin + window_millis`
    pub end: i64,
    /// Label attached to the window
    pub kind: AnnotationKind,
    /// Heart-rate value echoed after the label; absent for accelerations
    pub value: Option<String>,
}

impl Annotation {
    /// Render the annotation as one report line.
    pub fn render(&self) -> String {
        match &self.value {
            Some(v) => format!("{} - {} {} {}", self.begin, self.end, self.kind.label(), v),
            None => format!("{} - {} {}", self.begin, self.end, self.kind.label()),
        }
    }
}

/// What one ordinal position in the sorted sample expands to.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Acceleration,
    Baseline,
    BaselineWithRisk,
}

const SLOT_TEMPLATE: [Slot; 6] = [
    Slot::Acceleration,
    Slot::Acceleration,
    Slot::BaselineWithRisk,
    Slot::Acceleration,
    Slot::Baseline,
    Slot::BaselineWithRisk,
];

/// Number of rows sampled for one report.
pub const SAMPLES_PER_REPORT: usize = SLOT_TEMPLATE.len();

/// Expand sorted row indices into annotations.
///
/// `indices` must be sorted ascending and in range for `rows`. The index
/// at ordinal position `i` is expanded through the slot template into one
/// or two annotations over `[record_time, record_time + window_millis)`.
pub fn annotate(rows: &[TraceRow], indices: &[usize], window_millis: i64) -> Vec<Annotation> {
    let mut annotations = Vec::with_capacity(indices.len() + 2);

    for (slot, &index) in SLOT_TEMPLATE.iter().zip(indices) {
        let row = &rows[index];
        let begin = row.record_time;
        let end = begin + window_millis;

        match slot {
            Slot::Acceleration => annotations.push(Annotation {
                begin,
                end,
                kind: AnnotationKind::Acceleration,
                value: None,
            }),
            Slot::Baseline => annotations.push(Annotation {
                begin,
                end,
                kind: AnnotationKind::BaselineNormal,
                value: Some(row.value.clone()),
            }),
            Slot::BaselineWithRisk => {
                annotations.push(Annotation {
                    begin,
                    end,
                    kind: AnnotationKind::BaselineNormal,
                    value: Some(row.value.clone()),
                });
                annotations.push(Annotation {
                    begin,
                    end,
                    kind: AnnotationKind::Risk,
                    value: Some(row.value.clone()),
                });
            }
        }
    }

    annotations
}
