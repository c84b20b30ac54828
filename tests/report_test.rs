//! Integration tests for the full report pipeline.

use ctg_annotator::report::{annotate, SAMPLES_PER_REPORT};
use ctg_annotator::{build_report, load_trace, read_trace, DataName, TraceError, TraceRow};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

fn test_data_name() -> DataName {
    DataName {
        hr: "input/HR.csv".to_string(),
        uc: "input/UC.csv".to_string(),
        settings: "parameter.txt".to_string(),
        bpm: "null".to_string(),
    }
}

fn five_row_trace() -> Vec<TraceRow> {
    let csv = "ts,val\n0,A\n5000,B\n10000,C\n15000,D\n20000,E\n";
    read_trace(csv.as_bytes(), false).expect("fixture trace parses")
}

/// Split a rendered line into (begin, end, label-and-value).
fn parse_line(line: &str) -> (i64, i64, Vec<String>) {
    let tokens: Vec<&str> = line.split(' ').collect();
    assert!(tokens.len() >= 4, "short report line: {line}");
    assert_eq!(tokens[1], "-", "malformed report line: {line}");

    let begin = tokens[0].parse().expect("begin parses");
    let end = tokens[2].parse().expect("end parses");
    let rest = tokens[3..].iter().map(|t| t.to_string()).collect();
    (begin, end, rest)
}

#[test]
fn test_report_shape() {
    let rows = five_row_trace();
    let mut rng = StdRng::seed_from_u64(99);
    let lines = build_report(&test_data_name(), &rows, &mut rng, 5000).unwrap();

    // Header + 8 annotation lines + footer.
    assert_eq!(lines.len(), 10);
    assert_eq!(
        lines[0],
        "Data Name: input/HR.csv input/UC.csv parameter.txt null"
    );
    assert_eq!(lines[9], "Data End");
}

#[test]
fn test_label_sequence_is_data_independent() {
    let rows = five_row_trace();

    for seed in [0, 1, 42, 1234] {
        let mut rng = StdRng::seed_from_u64(seed);
        let lines = build_report(&test_data_name(), &rows, &mut rng, 5000).unwrap();

        let labels: Vec<String> = lines[1..9]
            .iter()
            .map(|l| parse_line(l).2[0].clone())
            .collect();

        assert_eq!(
            labels,
            vec![
                "Acceleration",
                "Acceleration",
                "Baseline-NORMAL",
                "Risk",
                "Acceleration",
                "Baseline-NORMAL",
                "Baseline-NORMAL",
                "Risk",
            ],
            "label sequence diverged for seed {seed}"
        );
    }
}

#[test]
fn test_windows_are_fixed_length_and_ordered() {
    let rows = five_row_trace();
    let mut rng = StdRng::seed_from_u64(7);
    let lines = build_report(&test_data_name(), &rows, &mut rng, 5000).unwrap();

    let mut previous_begin = i64::MIN;
    for line in &lines[1..9] {
        let (begin, end, _) = parse_line(line);
        assert_eq!(end - begin, 5000);
        assert!(begin >= previous_begin, "windows out of order: {line}");
        previous_begin = begin;
    }
}

#[test]
fn test_same_seed_reproduces_report() {
    let rows = five_row_trace();

    let mut a = StdRng::seed_from_u64(2024);
    let mut b = StdRng::seed_from_u64(2024);

    let first = build_report(&test_data_name(), &rows, &mut a, 5000).unwrap();
    let second = build_report(&test_data_name(), &rows, &mut b, 5000).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_fixed_sample_scenario() {
    // Sorted sample [0,1,2,3,4,4] over timestamps 0..20000 step 5000.
    let rows = five_row_trace();
    let lines: Vec<String> = annotate(&rows, &[0, 1, 2, 3, 4, 4], 5000)
        .iter()
        .map(|a| a.render())
        .collect();

    assert_eq!(
        lines,
        vec![
            "0 - 5000 Acceleration",
            "5000 - 10000 Acceleration",
            "10000 - 15000 Baseline-NORMAL C",
            "10000 - 15000 Risk C",
            "15000 - 20000 Acceleration",
            "20000 - 25000 Baseline-NORMAL E",
            "20000 - 25000 Baseline-NORMAL E",
            "20000 - 25000 Risk E",
        ]
    );
}

#[test]
fn test_sample_count_matches_template() {
    assert_eq!(SAMPLES_PER_REPORT, 6);
}

#[test]
fn test_load_trace_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("HR.csv");

    let mut file = std::fs::File::create(&path).expect("create fixture");
    write!(file, "RecordTime,F1\n1000,140\n2000,141\n3000,142\n").expect("write fixture");
    drop(file);

    let rows = load_trace(&path, false).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], TraceRow::new(1000, "140"));

    let mut rng = StdRng::seed_from_u64(5);
    let lines = build_report(&test_data_name(), &rows, &mut rng, 5000).unwrap();
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_unreadable_trace_reports_io_error() {
    let err = load_trace(std::path::Path::new("/no/such/HR.csv"), false).unwrap_err();
    assert!(matches!(err, TraceError::Io(_)));
}
