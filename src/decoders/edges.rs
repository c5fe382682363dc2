//! nWE edge scanning, window gating and hold-time measurement
//!
//! A window is the span `[rise, end)` of sample indices from an nWE rising edge
//! to the next nWE falling edge, or to the end of the trace if nWE never falls
//! again. Gating looks at CLE, ALE and RnB across the whole window.

use crate::trace::{Pin, Sample};

/// True if nWE goes 0 -> 1 between `index - 1` and `index`
#[inline]
pub fn is_rising(samples: &[Sample], index: usize) -> bool {
    index > 0 && index < samples.len() && !samples[index - 1].nwe && samples[index].nwe
}

/// True if nWE goes 1 -> 0 between `index - 1` and `index`
#[inline]
pub fn is_falling(samples: &[Sample], index: usize) -> bool {
    index > 0 && index < samples.len() && samples[index - 1].nwe && !samples[index].nwe
}

/// Smallest index `i > from` holding an nWE rising edge
pub fn next_rising_edge(samples: &[Sample], from: usize) -> Option<usize> {
    (from + 1..samples.len()).find(|&i| is_rising(samples, i))
}

/// Smallest index `i > from` holding an nWE falling edge
pub fn next_falling_edge(samples: &[Sample], from: usize) -> Option<usize> {
    (from + 1..samples.len()).find(|&i| is_falling(samples, i))
}

/// True if `pin` stays at `level` for every sample in `[start, end)`
fn held(samples: &[Sample], start: usize, end: usize, pin: Pin, level: bool) -> bool {
    samples[start..end].iter().all(|s| s.level(pin) == level)
}

/// How an nWE-high window gates at the top level of the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// CLE and ALE both held with RnB low
    Ambiguous,
    /// CLE held with RnB low
    Command,
    /// CLE held but RnB not low throughout
    CommandGatingFailed,
    /// Anything else; ignored outside a chain
    Other,
}

/// Gating state of one nWE-high window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub rise: usize,
    /// Index of the closing falling edge, if nWE falls again
    pub fall: Option<usize>,
    /// `fall`, or the trace length
    pub end: usize,
    /// RnB low throughout
    pub busy_held: bool,
    /// CLE high throughout
    pub cmd_held: bool,
    /// ALE high throughout
    pub addr_held: bool,
}

impl Window {
    /// Evaluate the window opened by the rising edge at `rise`
    pub fn at(samples: &[Sample], rise: usize) -> Self {
        let fall = next_falling_edge(samples, rise);
        let end = fall.unwrap_or(samples.len());

        Self {
            rise,
            fall,
            end,
            busy_held: held(samples, rise, end, Pin::RnB, false),
            cmd_held: held(samples, rise, end, Pin::Cle, true),
            addr_held: held(samples, rise, end, Pin::Ale, true),
        }
    }

    /// Top-level classification; first match wins
    pub fn kind(&self) -> WindowKind {
        if self.busy_held && self.cmd_held && self.addr_held {
            WindowKind::Ambiguous
        } else if self.busy_held && self.cmd_held {
            WindowKind::Command
        } else if self.cmd_held {
            WindowKind::CommandGatingFailed
        } else {
            WindowKind::Other
        }
    }

    /// Index after which the next window search resumes
    pub fn resume_from(&self) -> usize {
        self.fall.unwrap_or(self.rise)
    }
}

/// Time from `rise` until `pin` first drops low, or until the last sample.
///
/// The returned value is already rounded with [`round2`].
pub fn measure_hold(samples: &[Sample], rise: usize, pin: Pin) -> f64 {
    let t0 = samples[rise].time_ns;
    let t_end = samples[rise..]
        .iter()
        .find(|s| !s.level(pin))
        .or(samples.last())
        .map_or(t0, |s| s.time_ns);
    round2((t_end - t0) as f64)
}

/// Round to 2 decimals, halves away from zero
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
