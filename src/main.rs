//! CTG Annotator CLI
//!
//! Thin wrapper around the report pipeline: argument handling, trace
//! loading, and printing.

use clap::Parser;
use ctg_annotator::{build_report, load_trace, Config, DataName, VERSION};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ctg-annotate")]
#[command(version = VERSION)]
#[command(about = "Generate a CTG risk annotation report from a heart-rate trace", long_about = None)]
struct Cli {
    /// Heart-rate trace CSV (RecordTime,F1)
    hr: PathBuf,

    /// Uterine-contraction trace CSV (accepted for harness compatibility, not read)
    uc: String,

    /// Algorithm settings file (accepted for harness compatibility, not read)
    settings: String,

    /// Baseline BPM from the previous diagnosis, or "null" (accepted, not read)
    bpm: String,

    /// Seed for the row sampler; omit for a fresh sample each run
    #[arg(long, env = "CTG_ANNOTATE_SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    let rows = match load_trace(&cli.hr, config.lenient_rows) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error reading trace: {e}");
            std::process::exit(1);
        }
    };

    log::info!("loaded {} trace rows from {}", rows.len(), cli.hr.display());

    let data_name = DataName {
        hr: cli.hr.display().to_string(),
        uc: cli.uc,
        settings: cli.settings,
        bpm: cli.bpm,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let lines = match build_report(&data_name, &rows, &mut rng, config.window_millis) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for line in &lines {
        println!("{line}");
    }
}
