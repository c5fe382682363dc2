//! nand-ac: decode NAND command/address cycles and report AC hold times
//!
//! Usage:
//!   nand-ac capture.csv complete.csv rejects.csv ac_stats.csv ac_detect.csv
//!
//! DSLogic captures are accepted directly (probes named nWE, nCE0, ALE, CLE,
//! nRE, RnB, nWP, DQS, IO0..IO7):
//!   nand-ac capture.dsl complete.csv rejects.csv ac_stats.csv ac_detect.csv \
//!       --max-samples 50000000
//!
//! Exit codes: 0 success, 1 runtime failure, 2 usage error, 3 input not found.

use clap::Parser;
use nand_ac::report::ReportPaths;
use nand_ac::{Analyzer, AnalyzerConfig, MIN_TADDH_NS, MIN_TCMDH_NS, load_trace};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

const EXIT_RUNTIME_FAILURE: u8 = 1;
const EXIT_INPUT_NOT_FOUND: u8 = 3;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input trace (.csv export or .dsl capture)
    input: PathBuf,

    /// Complete commands output (Time,CMD,ADD1..ADD6)
    out_complete: PathBuf,

    /// Command/address reject log output
    out_reject: PathBuf,

    /// tCMDH/tADDH statistics output
    out_stats: PathBuf,

    /// AC detect log output
    out_detect: PathBuf,

    /// Minimum command hold time in ns
    #[arg(long, default_value_t = MIN_TCMDH_NS)]
    min_tcmdh: f64,

    /// Minimum address hold time in ns
    #[arg(long, default_value_t = MIN_TADDH_NS)]
    min_taddh: f64,

    /// Maximum number of capture positions to read (.dsl input only)
    #[arg(long)]
    max_samples: Option<u64>,
}

fn run(args: &Args) -> nand_ac::Result<()> {
    let samples = load_trace(&args.input, args.max_samples)?;

    let config = AnalyzerConfig::default()
        .with_min_tcmdh_ns(args.min_tcmdh)
        .with_min_taddh_ns(args.min_taddh);
    info!(
        "Analyzing {} samples (tCMDH >= {:.2} ns, tADDH >= {:.2} ns)",
        samples.len(),
        config.min_tcmdh_ns,
        config.min_taddh_ns
    );
    let analysis = Analyzer::new(config).analyze(&samples);

    let paths = ReportPaths {
        complete: &args.out_complete,
        rejects: &args.out_reject,
        stats: &args.out_stats,
        detects: &args.out_detect,
    };
    paths.write_all(&analysis)?;

    println!("Complete commands : {}", analysis.complete.len());
    println!("Cmd/Addr rejects  : {}", analysis.rejects.len());
    println!("tCMDH samples     : {}", analysis.tcmdh.len());
    println!("tADDH samples     : {}", analysis.taddh.len());
    println!("AC detects        : {}", analysis.detects.len());
    println!("Done.");
    for path in [paths.complete, paths.rejects, paths.stats, paths.detects] {
        println!("  -> {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if !args.input.exists() {
        println!("Input not found: {}", args.input.display());
        return ExitCode::from(EXIT_INPUT_NOT_FOUND);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("ERROR: {}", e);
            ExitCode::from(EXIT_RUNTIME_FAILURE)
        }
    }
}
