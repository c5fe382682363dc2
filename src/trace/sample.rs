//! Pin-state samples captured from the NAND bus

use std::fmt;

/// Bus signals carried by every [`Sample`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pin {
    /// Write enable (active low)
    NWe,
    /// Chip enable 0 (active low)
    NCe0,
    /// Address latch enable
    Ale,
    /// Command latch enable
    Cle,
    /// Read enable (active low)
    NRe,
    /// Ready/busy (low = target idle for gating purposes)
    RnB,
    /// Write protect (active low)
    NWp,
    /// Data strobe
    Dqs,
}

impl Pin {
    /// All pins, in trace column order
    pub const ALL: [Pin; 8] = [
        Pin::NCe0,
        Pin::Ale,
        Pin::Cle,
        Pin::NWe,
        Pin::NRe,
        Pin::RnB,
        Pin::NWp,
        Pin::Dqs,
    ];

    /// Signal name as it appears in trace headers and capture probe lists
    pub fn label(self) -> &'static str {
        match self {
            Pin::NWe => "nWE",
            Pin::NCe0 => "nCE0",
            Pin::Ale => "ALE",
            Pin::Cle => "CLE",
            Pin::NRe => "nRE",
            Pin::RnB => "RnB",
            Pin::NWp => "nWP",
            Pin::Dqs => "DQS",
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the capture: the I/O byte and every pin level at `time_ns`.
///
/// Pin levels are stored as `bool` (`true` = 1). `nwp` and `dqs` are carried
/// through ingestion but never consulted by the decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Timestamp in nanoseconds, non-decreasing across a trace
    pub time_ns: i64,
    /// I/O bus value as hex text, case as captured
    pub io: String,
    pub nce0: bool,
    pub ale: bool,
    pub cle: bool,
    pub nwe: bool,
    pub nre: bool,
    pub rnb: bool,
    pub nwp: bool,
    pub dqs: bool,
}

impl Sample {
    /// Create a sample with every pin low
    pub fn new(time_ns: i64, io: impl Into<String>) -> Self {
        Self {
            time_ns,
            io: io.into(),
            nce0: false,
            ale: false,
            cle: false,
            nwe: false,
            nre: false,
            rnb: false,
            nwp: false,
            dqs: false,
        }
    }

    /// Level of `pin` in this sample
    #[inline]
    pub fn level(&self, pin: Pin) -> bool {
        match pin {
            Pin::NWe => self.nwe,
            Pin::NCe0 => self.nce0,
            Pin::Ale => self.ale,
            Pin::Cle => self.cle,
            Pin::NRe => self.nre,
            Pin::RnB => self.rnb,
            Pin::NWp => self.nwp,
            Pin::Dqs => self.dqs,
        }
    }

    /// Set the level of `pin`
    pub fn set_level(&mut self, pin: Pin, value: bool) {
        match pin {
            Pin::NWe => self.nwe = value,
            Pin::NCe0 => self.nce0 = value,
            Pin::Ale => self.ale = value,
            Pin::Cle => self.cle = value,
            Pin::NRe => self.nre = value,
            Pin::RnB => self.rnb = value,
            Pin::NWp => self.nwp = value,
            Pin::Dqs => self.dqs = value,
        }
    }

    /// Builder form of [`Sample::set_level`]
    pub fn with(mut self, pin: Pin, value: bool) -> Self {
        self.set_level(pin, value);
        self
    }

    /// I/O value normalized to upper case
    pub fn io_upper(&self) -> String {
        self.io.to_ascii_uppercase()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Sample[t={}, io={}, nWE={}, CLE={}, ALE={}, RnB={}]",
            self.time_ns,
            self.io,
            u8::from(self.nwe),
            u8::from(self.cle),
            u8::from(self.ale),
            u8::from(self.rnb)
        )
    }
}
