//! CSV trace source
//!
//! Reads a logic-analyzer export with one row per sample. The header must name
//! `Time(ns)`, `IO` and every [`Pin`] column; column order is free and extra
//! columns are ignored.

use super::sample::{Pin, Sample};
use crate::{Result, TraceError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

const TIME_COLUMN: &str = "Time(ns)";
const IO_COLUMN: &str = "IO";

/// Column positions resolved from the header line
struct ColumnMap {
    time: usize,
    io: usize,
    pins: Vec<(Pin, usize)>,
}

impl ColumnMap {
    fn from_header(header: &str) -> Result<Self> {
        let cols: Vec<&str> = header.split(',').map(str::trim).collect();
        let find = |name: &str| cols.iter().position(|c| *c == name);

        let mut missing = Vec::new();
        let mut require = |name: &str| {
            let idx = find(name);
            if idx.is_none() {
                missing.push(name.to_string());
            }
            idx.unwrap_or_default()
        };

        let time = require(TIME_COLUMN);
        let io = require(IO_COLUMN);
        let pins = Pin::ALL
            .iter()
            .map(|&pin| (pin, require(pin.label())))
            .collect();

        if !missing.is_empty() {
            return Err(TraceError::MissingColumns(missing));
        }

        Ok(Self { time, io, pins })
    }

    fn parse_row(&self, line_no: usize, line: &str) -> Result<Sample> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let field = |idx: usize| {
            fields.get(idx).copied().ok_or_else(|| TraceError::Parse {
                line: line_no,
                message: format!("expected at least {} fields, found {}", idx + 1, fields.len()),
            })
        };

        let time_text = field(self.time)?;
        let time_ns = time_text.parse::<i64>().map_err(|e| TraceError::Parse {
            line: line_no,
            message: format!("invalid {} value '{}': {}", TIME_COLUMN, time_text, e),
        })?;

        let mut sample = Sample::new(time_ns, field(self.io)?);
        for &(pin, idx) in &self.pins {
            let value = match field(idx)? {
                "0" => false,
                "1" => true,
                other => {
                    return Err(TraceError::Parse {
                        line: line_no,
                        message: format!("pin {} must be 0 or 1, got '{}'", pin, other),
                    });
                }
            };
            sample.set_level(pin, value);
        }

        Ok(sample)
    }
}

/// Read every sample from a CSV trace file
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let samples = parse_samples(BufReader::new(file))?;
    info!("Read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parse CSV trace text from any buffered reader
pub fn parse_samples<R: BufRead>(reader: R) -> Result<Vec<Sample>> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(TraceError::EmptyTrace)??;
    let columns = ColumnMap::from_header(header.trim_start_matches('\u{feff}'))?;

    let mut samples: Vec<Sample> = Vec::with_capacity(1024);
    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // header is line 1
        let line_no = idx + 2;
        let sample = columns.parse_row(line_no, &line)?;
        if let Some(prev) = samples.last()
            && sample.time_ns < prev.time_ns
        {
            return Err(TraceError::Parse {
                line: line_no,
                message: format!(
                    "timestamp {} ns is earlier than previous {} ns",
                    sample.time_ns, prev.time_ns
                ),
            });
        }
        samples.push(sample);
    }

    debug!("Parsed {} CSV rows", samples.len());
    Ok(samples)
}
