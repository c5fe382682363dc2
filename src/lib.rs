//! NAND bus command/address decoder with AC hold-time extraction
//!
//! This library decodes NAND flash command and address cycles from a captured
//! logic-analyzer trace and measures the command hold time (tCMDH) and address
//! hold time (tADDH) of every cycle it recognizes.
//!
//! # Architecture
//!
//! - **Trace sources**: load a [`Sample`] stream from a CSV export or a DSLogic `.dsl` capture
//! - **Analyzer**: one forward pass over the samples; finds nWE rising edges, gates
//!   them on CLE/ALE/RnB, measures hold times and collects six-address chains
//! - **Statistics**: average/min/max/population standard deviation per hold parameter
//! - **Reports**: CSV writers for complete commands, rejects, statistics and the detect log
//!
//! # Example
//!
//! ```no_run
//! use nand_ac::{Analyzer, AnalyzerConfig, load_trace};
//!
//! let samples = load_trace("capture.csv", None)?;
//! let analysis = Analyzer::new(AnalyzerConfig::default()).analyze(&samples);
//! println!("{} complete commands", analysis.complete.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use thiserror::Error;

pub mod decoders;
pub mod report;
pub mod trace;

// Re-export decoder data types
pub use decoders::{
    ADDRESS_CYCLES, AcDetectLog, Analysis, Analyzer, AnalyzerConfig, CmdAddrReject, CommandName,
    DetectStage, HoldStats, MIN_TADDH_NS, MIN_TCMDH_NS, RejectKind, RejectReason, ValidCmdRow,
    stats,
};

// Re-export trace sources
pub use trace::{DslCapture, Pin, Sample, load_trace, read_samples};

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Header parsing error: {0}")]
    ParseHeader(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("CSV header missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Capture has no probe named {0}")]
    MissingProbe(String),

    #[error("Invalid block number: {0}")]
    InvalidBlock(u64),

    #[error("Trace is empty")]
    EmptyTrace,
}

pub type Result<T> = std::result::Result<T, TraceError>;
