//! Summary statistics over hold-time samples

use super::edges::round2;

/// Average, extremes and population standard deviation of a hold-time sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldStats {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (divisor = count)
    pub std: f64,
}

/// Summarize rounded hold times; `None` when there is nothing to summarize.
///
/// Each field is rounded to 2 decimals independently.
pub fn stats(values: &[f64]) -> Option<HoldStats> {
    if values.is_empty() {
        return None;
    }

    let count = values.len() as f64;
    let avg = values.iter().sum::<f64>() / count;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = values.iter().map(|v| (v - avg) * (v - avg)).sum::<f64>() / count;

    Some(HoldStats {
        avg: round2(avg),
        min: round2(min),
        max: round2(max),
        std: round2(variance.sqrt()),
    })
}
