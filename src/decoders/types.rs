//! Decoder output records and enums

use std::fmt;

/// Number of address cycles that must follow an accepted command
pub const ADDRESS_CYCLES: usize = 6;

/// Command named by the I/O byte latched in a command cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    /// 0x30
    Erase,
    /// 0x20
    Program,
    /// 0x10
    Read,
    /// 0x00
    Reset,
    /// Any other code
    Unknown,
}

impl CommandName {
    /// Classify an I/O hex code (case-insensitive, exact two-digit match)
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "30" => CommandName::Erase,
            "20" => CommandName::Program,
            "10" => CommandName::Read,
            "00" => CommandName::Reset,
            _ => CommandName::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Erase => "Erase",
            CommandName::Program => "Program",
            CommandName::Read => "Read",
            CommandName::Reset => "Reset",
            CommandName::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Granularity of a reject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectKind {
    Command,
    Address,
}

impl fmt::Display for RejectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            RejectKind::Command => "Command",
            RejectKind::Address => "Address",
        })
    }
}

/// Why a window or a chain was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// CLE and ALE both held high across the nWE-high window
    AmbiguousCleAle,
    /// CLE held but RnB not low; diagnostic only
    CommandGatingRnbHigh,
    /// Command hold time below the minimum
    TcmdhShort,
    /// Address hold time below the minimum
    TaddhShort,
    /// Window inside a chain lacks RnB low + ALE high
    AddressGatingFailed,
    /// A new command cycle started before the chain was complete
    NextCommandBefore6Addr,
    /// Trace ended before the chain was complete
    NonAddressWindow,
}

impl RejectReason {
    /// Reason code as written to the reject log
    pub fn code(self) -> &'static str {
        match self {
            RejectReason::AmbiguousCleAle => "AmbiguousCLE_ALE",
            RejectReason::CommandGatingRnbHigh => "CommandGating_RnBHigh",
            RejectReason::TcmdhShort => "tCMDHShort",
            RejectReason::TaddhShort => "tADDHShort",
            RejectReason::AddressGatingFailed => "AddressGatingFailed",
            RejectReason::NextCommandBefore6Addr => "NextCommandBefore6Addr",
            RejectReason::NonAddressWindow => "NonAddressWindow",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Stage of a pin-detected window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectStage {
    Command,
    Address,
}

impl fmt::Display for DetectStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DetectStage::Command => "Command",
            DetectStage::Address => "Address",
        })
    }
}

/// A command followed by a full address chain, all within timing
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCmdRow {
    /// nWE rising time of the command cycle
    pub time_ns: i64,
    pub command: CommandName,
    /// Address codes in latch order
    pub addresses: [String; ADDRESS_CYCLES],
}

/// One rejected window or chain
///
/// Parent linkage is asymmetric: address rejects carry both parent fields,
/// command rejects never carry `parent_cmd_time` and only chain-level command
/// rejects carry `parent_cmd_name`.
#[derive(Debug, Clone, PartialEq)]
pub struct CmdAddrReject {
    /// nWE rising time (the parent command's time for chain-level rejects)
    pub time_ns: i64,
    pub kind: RejectKind,
    pub reason: RejectReason,
    /// Upper-case I/O code at the rejecting rise; empty for chain-level rejects
    pub code: String,
    /// Measured hold time, if one was measured
    pub hold_ns: Option<f64>,
    /// Parent command time; 0 unless `kind` is `Address`
    pub parent_cmd_time: i64,
    pub parent_cmd_name: Option<CommandName>,
}

impl CmdAddrReject {
    /// Reject of a single command-cycle window
    pub fn command(time_ns: i64, reason: RejectReason, code: String, hold_ns: Option<f64>) -> Self {
        Self {
            time_ns,
            kind: RejectKind::Command,
            reason,
            code,
            hold_ns,
            parent_cmd_time: 0,
            parent_cmd_name: None,
        }
    }

    /// Command-level reject explaining a chain that never completed
    pub fn chain(parent: &ParentCommand, reason: RejectReason) -> Self {
        Self {
            time_ns: parent.time_ns,
            kind: RejectKind::Command,
            reason,
            code: String::new(),
            hold_ns: None,
            parent_cmd_time: 0,
            parent_cmd_name: Some(parent.name),
        }
    }

    /// Reject of an address window inside a chain
    pub fn address(
        parent: &ParentCommand,
        time_ns: i64,
        reason: RejectReason,
        code: String,
        hold_ns: Option<f64>,
    ) -> Self {
        Self {
            time_ns,
            kind: RejectKind::Address,
            reason,
            code,
            hold_ns,
            parent_cmd_time: parent.time_ns,
            parent_cmd_name: Some(parent.name),
        }
    }
}

/// A window that passed pin gating, whatever its timing
#[derive(Debug, Clone, PartialEq)]
pub struct AcDetectLog {
    /// nWE rising time
    pub time_ns: i64,
    pub stage: DetectStage,
    /// Command name, or "Address"
    pub name: &'static str,
    /// Upper-case I/O code
    pub code: String,
    /// Rounded hold time
    pub hold_ns: f64,
    /// Parent command time; 0 for command entries
    pub parent_cmd_time: i64,
    pub parent_cmd_name: Option<CommandName>,
}

/// Command a chain of address cycles belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentCommand {
    pub time_ns: i64,
    pub name: CommandName,
}
