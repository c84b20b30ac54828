//! CTG risk annotation report generator.
//!
//! Reads a cardiotocography heart-rate trace exported as CSV, samples six
//! rows at random, and renders the fixed annotation report consumed by the
//! supervising assessment harness: three `Acceleration` windows and three
//! `Baseline-NORMAL` windows, two of which also carry a `Risk` line.
//!
//! # Architecture
//!
//! ```text
//! trace (CSV) ──▶ sampler ──▶ annotate ──▶ report lines ──▶ stdout
//! ```
//!
//! The pipeline is pure: the only side effects live in the binary, which
//! opens the trace file and prints the rendered lines. Randomness enters
//! through a caller-supplied [`rand::Rng`], so tests and the `--seed` flag
//! get reproducible reports.
//!
//! # Example
//!
//! ```no_run
//! use ctg_annotator::{build_report, load_trace, DataName};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::path::Path;
//!
//! let rows = load_trace(Path::new("input/HR.csv"), false).expect("readable trace");
//!
//! let data_name = DataName {
//!     hr: "input/HR.csv".to_string(),
//!     uc: "input/UC.csv".to_string(),
//!     settings: "parameter.txt".to_string(),
//!     bpm: "null".to_string(),
//! };
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! for line in build_report(&data_name, &rows, &mut rng, 5000).expect("non-empty trace") {
//!     println!("{line}");
//! }
//! ```

pub mod config;
pub mod report;
pub mod trace;

// Re-export key types at crate root for convenience
pub use config::Config;
pub use report::{build_report, Annotation, AnnotationKind, DataName, ReportError};
pub use trace::{load_trace, read_trace, TraceError, TraceRow};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
