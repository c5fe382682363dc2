//! NAND bus decoders
//!
//! Command/address cycle detection, hold-time measurement and statistics.

pub mod analyzer;
pub mod edges;
pub mod stats;
pub mod types;

// Re-export common types
pub use types::{
    ADDRESS_CYCLES, AcDetectLog, CmdAddrReject, CommandName, DetectStage, ParentCommand,
    RejectKind, RejectReason, ValidCmdRow,
};

// Re-export the analyzer
pub use analyzer::{Analysis, Analyzer, AnalyzerConfig, MIN_TADDH_NS, MIN_TCMDH_NS};
pub use stats::{HoldStats, stats};
