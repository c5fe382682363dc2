//! NAND command/address cycle analyzer
//!
//! Single forward pass over the samples:
//!   1. Find every nWE rising edge
//!   2. Gate its window on CLE/ALE/RnB (ambiguous, command, diagnostic, ignored)
//!   3. For a command window, measure tCMDH, record it, then apply the threshold
//!   4. On acceptance, scan forward for six address windows, measuring and
//!      recording every tADDH before applying its threshold
//!   5. Emit a complete row only when all six addresses pass
//!
//! Measurement and acceptance are separate steps: hold times below the minimum
//! still land in the hold-time sinks and in the detect log.
//!
//! The outer scan resumes right after each command's rising edge, not after the
//! consumed chain. Address windows never satisfy the command gate, so walking
//! over them again only re-reads them.

use super::edges::{Window, WindowKind, is_rising, measure_hold, next_rising_edge};
use super::stats::{HoldStats, stats};
use super::types::{
    ADDRESS_CYCLES, AcDetectLog, CmdAddrReject, CommandName, DetectStage, ParentCommand,
    RejectReason, ValidCmdRow,
};
use crate::trace::{Pin, Sample};
use tracing::{debug, trace};

/// Default minimum command hold time in nanoseconds
pub const MIN_TCMDH_NS: f64 = 20.0;
/// Default minimum address hold time in nanoseconds
pub const MIN_TADDH_NS: f64 = 30.0;

/// Timing thresholds applied when accepting cycles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    pub min_tcmdh_ns: f64,
    pub min_taddh_ns: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_tcmdh_ns: MIN_TCMDH_NS,
            min_taddh_ns: MIN_TADDH_NS,
        }
    }
}

impl AnalyzerConfig {
    /// With custom command hold minimum
    pub fn with_min_tcmdh_ns(mut self, min_tcmdh_ns: f64) -> Self {
        self.min_tcmdh_ns = min_tcmdh_ns;
        self
    }

    /// With custom address hold minimum
    pub fn with_min_taddh_ns(mut self, min_taddh_ns: f64) -> Self {
        self.min_taddh_ns = min_taddh_ns;
        self
    }
}

/// Everything one analysis pass produces, each in detection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Commands with six accepted addresses
    pub complete: Vec<ValidCmdRow>,
    pub rejects: Vec<CmdAddrReject>,
    /// Every pin-detected command hold, including ones below the minimum
    pub tcmdh: Vec<f64>,
    /// Every pin-detected address hold, including ones below the minimum
    pub taddh: Vec<f64>,
    pub detects: Vec<AcDetectLog>,
}

impl Analysis {
    pub fn tcmdh_stats(&self) -> Option<HoldStats> {
        stats(&self.tcmdh)
    }

    pub fn taddh_stats(&self) -> Option<HoldStats> {
        stats(&self.taddh)
    }
}

/// Result of collecting the address chain behind one command
enum ChainOutcome {
    Complete([String; ADDRESS_CYCLES]),
    /// Address-level rejects are already recorded; the command-level one, if
    /// any, is carried here
    Aborted(Option<CmdAddrReject>),
}

/// NAND bus analyzer
///
/// # Example
/// ```
/// use nand_ac::{Analyzer, AnalyzerConfig};
///
/// let analyzer = Analyzer::new(AnalyzerConfig::default().with_min_taddh_ns(25.0));
/// let analysis = analyzer.analyze(&[]);
/// assert!(analysis.complete.is_empty());
/// assert!(analysis.tcmdh_stats().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Run the full pass over `samples`
    pub fn analyze(&self, samples: &[Sample]) -> Analysis {
        let mut scan = Scan {
            samples,
            config: self.config,
            out: Analysis::default(),
        };
        scan.run();

        debug!(
            "Analysis done: {} complete, {} rejects, {} tCMDH, {} tADDH, {} detects",
            scan.out.complete.len(),
            scan.out.rejects.len(),
            scan.out.tcmdh.len(),
            scan.out.taddh.len(),
            scan.out.detects.len()
        );

        scan.out
    }
}

/// State of one pass
struct Scan<'a> {
    samples: &'a [Sample],
    config: AnalyzerConfig,
    out: Analysis,
}

impl Scan<'_> {
    fn run(&mut self) {
        for i in 1..self.samples.len() {
            if !is_rising(self.samples, i) {
                continue;
            }

            let window = Window::at(self.samples, i);
            trace!("nWE rise at index {}: {:?}", i, window);

            match window.kind() {
                WindowKind::Ambiguous => {
                    let sample = &self.samples[i];
                    debug!("Ambiguous CLE/ALE window at {} ns", sample.time_ns);
                    self.out.rejects.push(CmdAddrReject::command(
                        sample.time_ns,
                        RejectReason::AmbiguousCleAle,
                        sample.io_upper(),
                        None,
                    ));
                }
                WindowKind::CommandGatingFailed => {
                    let sample = &self.samples[i];
                    self.out.rejects.push(CmdAddrReject::command(
                        sample.time_ns,
                        RejectReason::CommandGatingRnbHigh,
                        sample.io_upper(),
                        None,
                    ));
                }
                WindowKind::Command => self.command_window(&window),
                WindowKind::Other => {}
            }
        }
    }

    fn command_window(&mut self, window: &Window) {
        let sample = &self.samples[window.rise];
        let code = sample.io_upper();
        let name = CommandName::from_code(&code);
        let parent = ParentCommand {
            time_ns: sample.time_ns,
            name,
        };

        // Record first, gate second
        let hold = measure_hold(self.samples, window.rise, Pin::Cle);
        self.out.tcmdh.push(hold);
        self.out.detects.push(AcDetectLog {
            time_ns: parent.time_ns,
            stage: DetectStage::Command,
            name: name.as_str(),
            code: code.clone(),
            hold_ns: hold,
            parent_cmd_time: 0,
            parent_cmd_name: None,
        });

        if hold < self.config.min_tcmdh_ns {
            debug!(
                "{} at {} ns: tCMDH {:.2} ns below {:.2} ns",
                name, parent.time_ns, hold, self.config.min_tcmdh_ns
            );
            self.out.rejects.push(CmdAddrReject::command(
                parent.time_ns,
                RejectReason::TcmdhShort,
                code,
                Some(hold),
            ));
            return;
        }

        match self.collect_addresses(&parent, window.resume_from()) {
            ChainOutcome::Complete(addresses) => {
                debug!(
                    "{} at {} ns: complete [{}]",
                    name,
                    parent.time_ns,
                    addresses.join(" ")
                );
                self.out.complete.push(ValidCmdRow {
                    time_ns: parent.time_ns,
                    command: name,
                    addresses,
                });
            }
            ChainOutcome::Aborted(command_reject) => {
                if let Some(reject) = command_reject {
                    debug!("{} at {} ns: chain rejected ({})", name, parent.time_ns, reject.reason);
                    self.out.rejects.push(reject);
                }
            }
        }
    }

    /// Collect the address windows following a command, starting the edge
    /// search after index `from`
    fn collect_addresses(&mut self, parent: &ParentCommand, mut from: usize) -> ChainOutcome {
        let mut addresses = Vec::with_capacity(ADDRESS_CYCLES);

        while addresses.len() < ADDRESS_CYCLES {
            let Some(rise) = next_rising_edge(self.samples, from) else {
                break;
            };
            let window = Window::at(self.samples, rise);
            let sample = &self.samples[rise];
            let code = sample.io_upper();

            // A command gate here also covers a window that is ambiguous, so
            // there is no separate address-level ambiguous reject: the outer
            // scan reports that window itself when it reaches it. See
            // test_ambiguous_window_inside_chain.
            if window.busy_held && window.cmd_held {
                return ChainOutcome::Aborted(Some(CmdAddrReject::chain(
                    parent,
                    RejectReason::NextCommandBefore6Addr,
                )));
            }

            if !(window.busy_held && window.addr_held) {
                self.out.rejects.push(CmdAddrReject::address(
                    parent,
                    sample.time_ns,
                    RejectReason::AddressGatingFailed,
                    code,
                    None,
                ));
                return ChainOutcome::Aborted(None);
            }

            let hold = measure_hold(self.samples, rise, Pin::Ale);
            self.out.taddh.push(hold);
            self.out.detects.push(AcDetectLog {
                time_ns: sample.time_ns,
                stage: DetectStage::Address,
                name: "Address",
                code: code.clone(),
                hold_ns: hold,
                parent_cmd_time: parent.time_ns,
                parent_cmd_name: Some(parent.name),
            });

            if hold < self.config.min_taddh_ns {
                self.out.rejects.push(CmdAddrReject::address(
                    parent,
                    sample.time_ns,
                    RejectReason::TaddhShort,
                    code,
                    Some(hold),
                ));
                return ChainOutcome::Aborted(None);
            }

            trace!("Address {} = {} at {} ns", addresses.len() + 1, code, sample.time_ns);
            addresses.push(code);
            from = window.resume_from();
        }

        match <[String; ADDRESS_CYCLES]>::try_from(addresses) {
            Ok(addresses) => ChainOutcome::Complete(addresses),
            Err(partial) => {
                trace!("Trace ended after {} addresses", partial.len());
                ChainOutcome::Aborted(Some(CmdAddrReject::chain(
                    parent,
                    RejectReason::NonAddressWindow,
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::types::RejectKind;

    /// Builds a bus trace one latch cycle at a time.
    ///
    /// Each cycle is a setup sample (nWE low, latch pins high), the nWE rising
    /// edge 5 ns later, nWE falling 10 ns after the rise (or together with the
    /// latch release for holds of 10 ns or less) and the latch release `hold`
    /// ns after the rise.
    struct Bus {
        samples: Vec<Sample>,
        t: i64,
    }

    impl Bus {
        fn new() -> Self {
            Self {
                samples: vec![Sample::new(0, "00")],
                t: 10,
            }
        }

        fn push(&mut self, time_ns: i64, code: &str, nwe: bool, latches: &[Pin], busy: bool) {
            let mut sample = Sample::new(time_ns, code)
                .with(Pin::NWe, nwe)
                .with(Pin::RnB, busy);
            for &pin in latches {
                sample.set_level(pin, true);
            }
            self.samples.push(sample);
        }

        /// Append one cycle; returns the rising edge time
        fn cycle(&mut self, code: &str, latches: &[Pin], hold: i64, busy: bool) -> i64 {
            let rise = self.t + 5;
            self.push(self.t, code, false, latches, busy);
            self.push(rise, code, true, latches, busy);
            if hold > 10 {
                self.push(rise + 10, code, false, latches, busy);
            }
            self.push(rise + hold, code, false, &[], busy);
            self.t = rise + hold + 10;
            rise
        }

        fn cmd(&mut self, code: &str, hold: i64) -> i64 {
            self.cycle(code, &[Pin::Cle], hold, false)
        }

        fn addr(&mut self, code: &str, hold: i64) -> i64 {
            self.cycle(code, &[Pin::Ale], hold, false)
        }

        /// Address cycle whose nWE never falls before the trace ends
        fn open_addr(&mut self, code: &str, duration: i64) -> i64 {
            let rise = self.t + 5;
            self.push(self.t, code, false, &[Pin::Ale], false);
            self.push(rise, code, true, &[Pin::Ale], false);
            self.push(rise + duration, code, true, &[Pin::Ale], false);
            rise
        }

        fn analyze(&self) -> Analysis {
            Analyzer::default().analyze(&self.samples)
        }
    }

    const ADDRS: [&str; 6] = ["00", "01", "a2", "03", "04", "05"];

    #[test]
    fn test_complete_command() {
        let mut bus = Bus::new();
        let t_cmd = bus.cmd("30", 25);
        for code in ADDRS {
            bus.addr(code, 35);
        }

        let a = bus.analyze();
        assert!(a.rejects.is_empty(), "unexpected rejects: {:?}", a.rejects);
        assert_eq!(a.complete.len(), 1);
        assert_eq!(a.complete[0].time_ns, t_cmd);
        assert_eq!(a.complete[0].command, CommandName::Erase);
        assert_eq!(a.complete[0].addresses, ["00", "01", "A2", "03", "04", "05"].map(String::from));
        assert_eq!(a.tcmdh, vec![25.0]);
        assert_eq!(a.taddh, vec![35.0; 6]);

        assert_eq!(a.detects.len(), 7);
        assert_eq!(a.detects[0].stage, DetectStage::Command);
        assert_eq!(a.detects[0].name, "Erase");
        assert_eq!(a.detects[0].parent_cmd_time, 0);
        assert!(a.detects[1..].iter().all(|d| d.stage == DetectStage::Address
            && d.name == "Address"
            && d.parent_cmd_time == t_cmd
            && d.parent_cmd_name == Some(CommandName::Erase)));
    }

    #[test]
    fn test_short_address_discards_chain() {
        let mut bus = Bus::new();
        let t_cmd = bus.cmd("30", 25);
        let mut t_short = 0;
        for (i, code) in ADDRS.iter().enumerate() {
            let t = bus.addr(code, if i == 3 { 18 } else { 35 });
            if i == 3 {
                t_short = t;
            }
        }

        let a = bus.analyze();
        assert!(a.complete.is_empty());
        assert_eq!(a.rejects.len(), 1);

        let r = &a.rejects[0];
        assert_eq!(r.kind, RejectKind::Address);
        assert_eq!(r.reason, RejectReason::TaddhShort);
        assert_eq!(r.time_ns, t_short);
        assert_eq!(r.code, "03");
        assert_eq!(r.hold_ns, Some(18.0));
        assert_eq!(r.parent_cmd_time, t_cmd);
        assert_eq!(r.parent_cmd_name, Some(CommandName::Erase));

        assert_eq!(a.taddh, vec![35.0, 35.0, 35.0, 18.0]);
        assert_eq!(a.detects.len(), 5);
        assert_eq!(a.detects[4].hold_ns, 18.0);
    }

    #[test]
    fn test_ambiguous_window() {
        let mut bus = Bus::new();
        let t = bus.cycle("30", &[Pin::Cle, Pin::Ale], 25, false);

        let a = bus.analyze();
        assert_eq!(a.rejects.len(), 1);
        assert_eq!(a.rejects[0].kind, RejectKind::Command);
        assert_eq!(a.rejects[0].reason, RejectReason::AmbiguousCleAle);
        assert_eq!(a.rejects[0].time_ns, t);
        assert_eq!(a.rejects[0].code, "30");
        assert_eq!(a.rejects[0].hold_ns, None);
        assert!(a.tcmdh.is_empty());
        assert!(a.taddh.is_empty());
        assert!(a.detects.is_empty());
    }

    #[test]
    fn test_ambiguous_window_inside_chain() {
        let mut bus = Bus::new();
        let t_cmd = bus.cmd("30", 25);
        bus.addr("00", 35);
        let t_amb = bus.cycle("11", &[Pin::Cle, Pin::Ale], 25, false);

        let a = bus.analyze();
        let reasons: Vec<_> = a.rejects.iter().map(|r| (r.kind, r.reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (RejectKind::Command, RejectReason::NextCommandBefore6Addr),
                (RejectKind::Command, RejectReason::AmbiguousCleAle),
            ]
        );
        assert_eq!(a.rejects[0].time_ns, t_cmd);
        assert_eq!(a.rejects[1].time_ns, t_amb);
        assert_eq!(
            a.rejects
                .iter()
                .filter(|r| r.reason == RejectReason::AmbiguousCleAle)
                .count(),
            1
        );
    }

    #[test]
    fn test_short_command_skips_chain() {
        let mut bus = Bus::new();
        let t = bus.cmd("20", 8);
        for code in ADDRS {
            bus.addr(code, 35);
        }

        let a = bus.analyze();
        assert!(a.complete.is_empty());
        assert_eq!(a.rejects.len(), 1);
        assert_eq!(a.rejects[0].reason, RejectReason::TcmdhShort);
        assert_eq!(a.rejects[0].time_ns, t);
        assert_eq!(a.rejects[0].hold_ns, Some(8.0));
        assert_eq!(a.rejects[0].parent_cmd_name, None);
        assert_eq!(a.tcmdh, vec![8.0]);
        assert!(a.taddh.is_empty());
        assert_eq!(a.detects.len(), 1);
        assert_eq!(a.detects[0].name, "Program");
    }

    #[test]
    fn test_command_gating_rnb_high() {
        let mut bus = Bus::new();
        let t = bus.cycle("10", &[Pin::Cle], 25, true);

        let a = bus.analyze();
        assert_eq!(a.rejects.len(), 1);
        assert_eq!(a.rejects[0].kind, RejectKind::Command);
        assert_eq!(a.rejects[0].reason, RejectReason::CommandGatingRnbHigh);
        assert_eq!(a.rejects[0].time_ns, t);
        assert_eq!(a.rejects[0].code, "10");
        assert!(a.tcmdh.is_empty());
        assert!(a.detects.is_empty());
    }

    #[test]
    fn test_next_command_before_six_addresses() {
        let mut bus = Bus::new();
        let t_erase = bus.cmd("30", 25);
        bus.addr("00", 35);
        bus.addr("01", 35);
        let t_read = bus.cmd("10", 25);
        for code in ADDRS {
            bus.addr(code, 40);
        }

        let a = bus.analyze();
        assert_eq!(a.rejects.len(), 1);
        let r = &a.rejects[0];
        assert_eq!(r.kind, RejectKind::Command);
        assert_eq!(r.reason, RejectReason::NextCommandBefore6Addr);
        assert_eq!(r.time_ns, t_erase);
        assert!(r.code.is_empty());
        assert_eq!(r.hold_ns, None);
        assert_eq!(r.parent_cmd_time, 0);
        assert_eq!(r.parent_cmd_name, Some(CommandName::Erase));

        assert_eq!(a.complete.len(), 1);
        assert_eq!(a.complete[0].time_ns, t_read);
        assert_eq!(a.complete[0].command, CommandName::Read);
        assert_eq!(a.tcmdh, vec![25.0, 25.0]);
        assert_eq!(a.taddh.len(), 8);
        assert_eq!(a.detects.len(), 10);
    }

    #[test]
    fn test_address_gating_failed() {
        let mut bus = Bus::new();
        let t_cmd = bus.cmd("30", 25);
        bus.addr("00", 35);
        bus.addr("01", 35);
        let t_bad = bus.cycle("02", &[Pin::Ale], 35, true);
        for code in ADDRS {
            bus.addr(code, 35);
        }

        let a = bus.analyze();
        assert!(a.complete.is_empty());
        assert_eq!(a.rejects.len(), 1);
        let r = &a.rejects[0];
        assert_eq!(r.kind, RejectKind::Address);
        assert_eq!(r.reason, RejectReason::AddressGatingFailed);
        assert_eq!(r.time_ns, t_bad);
        assert_eq!(r.code, "02");
        assert_eq!(r.hold_ns, None);
        assert_eq!(r.parent_cmd_time, t_cmd);
        assert_eq!(a.taddh, vec![35.0, 35.0]);
    }

    #[test]
    fn test_data_cycle_fails_address_gating() {
        let mut bus = Bus::new();
        bus.cmd("30", 25);
        bus.cycle("ab", &[], 35, false);

        let a = bus.analyze();
        assert_eq!(a.rejects.len(), 1);
        assert_eq!(a.rejects[0].reason, RejectReason::AddressGatingFailed);
        assert_eq!(a.rejects[0].code, "AB");
    }

    #[test]
    fn test_trace_ends_before_six_addresses() {
        let mut bus = Bus::new();
        let t_cmd = bus.cmd("00", 25);
        for code in &ADDRS[..3] {
            bus.addr(code, 35);
        }

        let a = bus.analyze();
        assert!(a.complete.is_empty());
        assert_eq!(a.rejects.len(), 1);
        let r = &a.rejects[0];
        assert_eq!(r.kind, RejectKind::Command);
        assert_eq!(r.reason, RejectReason::NonAddressWindow);
        assert_eq!(r.time_ns, t_cmd);
        assert!(r.code.is_empty());
        assert_eq!(r.parent_cmd_time, 0);
        assert_eq!(r.parent_cmd_name, Some(CommandName::Reset));
        assert_eq!(a.taddh.len(), 3);
        assert_eq!(a.detects.len(), 4);
    }

    #[test]
    fn test_last_address_open_to_trace_end() {
        let mut bus = Bus::new();
        bus.cmd("ff", 25);
        for code in &ADDRS[..5] {
            bus.addr(code, 35);
        }
        bus.open_addr("05", 40);

        let a = bus.analyze();
        assert!(a.rejects.is_empty(), "unexpected rejects: {:?}", a.rejects);
        assert_eq!(a.complete.len(), 1);
        assert_eq!(a.complete[0].command, CommandName::Unknown);
        assert_eq!(a.complete[0].addresses[5], "05");
        assert_eq!(a.taddh[5], 40.0);
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let mut bus = Bus::new();
        bus.cmd("30", 25);
        for code in ADDRS {
            bus.addr(code, 35);
        }

        let strict = Analyzer::new(AnalyzerConfig::default().with_min_taddh_ns(40.0));
        let a = strict.analyze(&bus.samples);
        assert!(a.complete.is_empty());
        assert_eq!(a.rejects[0].reason, RejectReason::TaddhShort);
        assert_eq!(a.taddh, vec![35.0]);

        let strict = Analyzer::new(AnalyzerConfig::default().with_min_tcmdh_ns(30.0));
        let a = strict.analyze(&bus.samples);
        assert_eq!(a.rejects[0].reason, RejectReason::TcmdhShort);
        assert!(a.taddh.is_empty());
    }

    #[test]
    fn test_hold_exactly_at_minimum_passes() {
        let mut bus = Bus::new();
        bus.cmd("30", 20);
        for code in ADDRS {
            bus.addr(code, 30);
        }

        let a = bus.analyze();
        assert!(a.rejects.is_empty());
        assert_eq!(a.complete.len(), 1);
    }

    #[test]
    fn test_back_to_back_commands() {
        let mut bus = Bus::new();
        for cmd in ["30", "20"] {
            bus.cmd(cmd, 25);
            for code in ADDRS {
                bus.addr(code, 35);
            }
        }

        let a = bus.analyze();
        assert!(a.rejects.is_empty());
        let names: Vec<_> = a.complete.iter().map(|r| r.command).collect();
        assert_eq!(names, vec![CommandName::Erase, CommandName::Program]);
        assert_eq!(a.taddh.len(), 12);
    }

    #[test]
    fn test_hold_samples_match_detect_log() {
        let mut bus = Bus::new();
        bus.cmd("30", 25);
        bus.addr("00", 35);
        bus.addr("01", 12);
        bus.cmd("10", 15);
        bus.cmd("20", 31);
        for code in ADDRS {
            bus.addr(code, 33);
        }

        let a = bus.analyze();
        let cmd_detects: Vec<f64> = a
            .detects
            .iter()
            .filter(|d| d.stage == DetectStage::Command)
            .map(|d| d.hold_ns)
            .collect();
        let addr_detects: Vec<f64> = a
            .detects
            .iter()
            .filter(|d| d.stage == DetectStage::Address)
            .map(|d| d.hold_ns)
            .collect();
        assert_eq!(cmd_detects, a.tcmdh);
        assert_eq!(addr_detects, a.taddh);
        assert_eq!(a.complete.len(), 1);
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let mut bus = Bus::new();
        bus.cmd("30", 25);
        bus.addr("00", 35);
        bus.cycle("30", &[Pin::Cle, Pin::Ale], 25, false);
        bus.cmd("10", 25);
        for code in ADDRS {
            bus.addr(code, 35);
        }

        assert_eq!(bus.analyze(), bus.analyze());
    }

    #[test]
    fn test_empty_and_single_sample() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.analyze(&[]), Analysis::default());
        assert_eq!(analyzer.analyze(&[Sample::new(0, "00")]), Analysis::default());
    }

    #[test]
    fn test_stats_accessors() {
        let mut bus = Bus::new();
        bus.cmd("30", 25);
        bus.addr("00", 35);
        bus.addr("01", 45);

        let a = bus.analyze();
        let cmd = a.tcmdh_stats().unwrap();
        assert_eq!(cmd.avg, 25.0);
        let addr = a.taddh_stats().unwrap();
        assert_eq!(addr.avg, 40.0);
        assert_eq!(addr.std, 5.0);
        assert!(Analysis::default().taddh_stats().is_none());
    }
}
