//! DSLogic capture source
//!
//! Provides `DslCapture` - reads a DSLogic .dsl capture (a ZIP archive holding a
//! `header` text file and packed-bit blocks `L-<probe>/<block>`) and turns the
//! NAND bus probes into a [`Sample`] stream.
//!
//! Probes are matched by name: `nWE`, `nCE0`, `ALE`, `CLE`, `nRE`, `RnB`, `nWP`,
//! `DQS` and the data bits `IO0`..`IO7`. A sample is emitted only where one of
//! those probes changes (plus the first and last positions), so every edge and
//! every hold boundary keeps its exact timestamp while the stream stays small.

use super::sample::{Pin, Sample};
use crate::{Result, TraceError};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;

/// Number of data probes forming the I/O byte
const IO_BITS: usize = 8;

/// Header information from a DSL file
#[derive(Debug, Clone)]
pub struct DslHeader {
    /// Total number of probes/channels
    pub total_probes: usize,
    /// Sample rate as a string (e.g., "50 MHz")
    pub samplerate: String,
    /// Sample rate in Hz, always finite and positive
    pub samplerate_hz: f64,
    /// Total number of samples captured
    pub total_samples: u64,
    /// Total number of data blocks
    pub total_blocks: u64,
    /// Probe names indexed by probe number (0-based)
    pub probe_names: Vec<String>,
}

/// Probe numbers of the bus signals inside a capture
#[derive(Debug, Clone)]
struct ProbeMap {
    pins: Vec<(Pin, usize)>,
    /// IO0..IO7, LSB first
    io: Vec<usize>,
}

impl ProbeMap {
    fn resolve(header: &DslHeader) -> Result<Self> {
        let find = |name: &str| {
            header
                .probe_names
                .iter()
                .position(|p| p.trim() == name)
                .ok_or_else(|| TraceError::MissingProbe(name.to_string()))
        };

        let pins = Pin::ALL
            .iter()
            .map(|&pin| find(pin.label()).map(|probe| (pin, probe)))
            .collect::<Result<Vec<_>>>()?;
        let io = (0..IO_BITS)
            .map(|bit| find(&format!("IO{}", bit)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { pins, io })
    }
}

/// A DSLogic capture opened for NAND bus analysis
///
/// # Example
/// ```no_run
/// use nand_ac::DslCapture;
///
/// let mut capture = DslCapture::open("nand.dsl")?.with_max_samples(Some(1_000_000));
/// let samples = capture.read_samples()?;
/// # Ok::<(), nand_ac::TraceError>(())
/// ```
pub struct DslCapture {
    archive: ZipArchive<File>,
    header: DslHeader,
    probes: ProbeMap,
    max_samples: Option<u64>,
}

impl DslCapture {
    /// Open a capture and map its probes onto the bus signals
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;
        let header = Self::parse_header(&mut archive)?;
        let probes = ProbeMap::resolve(&header)?;

        debug!(
            "Probe map: {}",
            probes
                .pins
                .iter()
                .map(|(pin, probe)| format!("{}=probe{}", pin, probe))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            archive,
            header,
            probes,
            max_samples: None,
        })
    }

    fn parse_header(archive: &mut ZipArchive<File>) -> Result<DslHeader> {
        let mut header_file = archive
            .by_name("header")
            .map_err(|e| TraceError::ParseHeader(format!("Cannot find header file: {}", e)))?;

        let mut header_content = String::new();
        header_file.read_to_string(&mut header_content)?;
        drop(header_file);

        let mut total_probes: Option<usize> = None;
        let mut samplerate: Option<String> = None;
        let mut total_samples: Option<u64> = None;
        let mut total_blocks: Option<u64> = None;
        let mut probe_names_map: HashMap<usize, String> = HashMap::new();

        for line in header_content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(value) = line.strip_prefix("total probes = ") {
                total_probes = value.parse().ok();
            } else if let Some(value) = line.strip_prefix("samplerate = ") {
                samplerate = Some(value.to_string());
            } else if let Some(value) = line.strip_prefix("total samples = ") {
                total_samples = value.parse().ok();
            } else if let Some(value) = line.strip_prefix("total blocks = ") {
                total_blocks = value.parse().ok();
            } else if line.starts_with("probe")
                && let Some((probe_part, name)) = line.split_once(" = ")
                && let Some(num_str) = probe_part.strip_prefix("probe")
                && let Ok(probe_num) = num_str.parse::<usize>()
            {
                probe_names_map.insert(probe_num, name.to_string());
            }
        }

        let total_probes =
            total_probes.ok_or_else(|| TraceError::MissingField("total probes".to_string()))?;
        let samplerate =
            samplerate.ok_or_else(|| TraceError::MissingField("samplerate".to_string()))?;
        let total_samples =
            total_samples.ok_or_else(|| TraceError::MissingField("total samples".to_string()))?;
        let total_blocks =
            total_blocks.ok_or_else(|| TraceError::MissingField("total blocks".to_string()))?;

        let samplerate_hz = Self::parse_sample_rate(&samplerate)
            .ok_or_else(|| TraceError::ParseHeader(format!("Invalid sample rate: {}", samplerate)))?;

        let probe_names = (0..total_probes)
            .map(|i| {
                probe_names_map
                    .get(&i)
                    .cloned()
                    .unwrap_or_else(|| format!("Probe{}", i))
            })
            .collect();

        Ok(DslHeader {
            total_probes,
            samplerate,
            samplerate_hz,
            total_samples,
            total_blocks,
            probe_names,
        })
    }

    /// Get the header information
    pub fn header(&self) -> &DslHeader {
        &self.header
    }

    /// Set maximum number of samples to read from file
    pub fn with_max_samples(mut self, max_samples: Option<u64>) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Decode the capture into a run-length [`Sample`] stream
    pub fn read_samples(&mut self) -> Result<Vec<Sample>> {
        let pin_bits = self
            .probes
            .pins
            .clone()
            .into_iter()
            .map(|(pin, probe)| Ok((pin, self.load_channel(probe)?)))
            .collect::<Result<Vec<_>>>()?;
        let io_bits = self
            .probes
            .io
            .clone()
            .into_iter()
            .map(|probe| self.load_channel(probe))
            .collect::<Result<Vec<_>>>()?;

        // Channels can be shorter than the header claims if the capture was cut short
        let available = pin_bits
            .iter()
            .map(|(_, data)| data.len())
            .chain(io_bits.iter().map(Vec::len))
            .min()
            .unwrap_or(0) as u64
            * 8;
        let total = self
            .max_samples
            .unwrap_or(self.header.total_samples)
            .min(self.header.total_samples)
            .min(available);

        let mut samples = Vec::new();
        let mut previous: Option<(u16, u8)> = None;

        for position in 0..total {
            let bit = position as usize;
            let pin_state = pin_bits
                .iter()
                .enumerate()
                .fold(0u16, |acc, (idx, (_, data))| {
                    acc | (u16::from(Self::get_bit(data, bit)) << idx)
                });
            let io = io_bits
                .iter()
                .enumerate()
                .fold(0u8, |acc, (idx, data)| acc | (u8::from(Self::get_bit(data, bit)) << idx));

            let state = (pin_state, io);
            let is_last = position + 1 == total;
            if previous != Some(state) || is_last {
                let mut sample = Sample::new(self.position_to_timestamp(position), format!("{:02X}", io));
                for (idx, (pin, _)) in pin_bits.iter().enumerate() {
                    sample.set_level(*pin, (pin_state >> idx) & 1 == 1);
                }
                samples.push(sample);
                previous = Some(state);
            }
        }

        info!(
            "Decoded {} capture positions at {:.1} MHz into {} samples",
            total,
            self.header.samplerate_hz / 1_000_000.0,
            samples.len()
        );

        Ok(samples)
    }

    /// Load every block of one probe, concatenated in block order
    fn load_channel(&mut self, probe: usize) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        for block_num in 0..self.header.total_blocks {
            let block_name = format!("L-{}/{}", probe, block_num);
            let mut file = self
                .archive
                .by_name(&block_name)
                .map_err(|_| TraceError::InvalidBlock(block_num))?;
            file.read_to_end(&mut data)?;
        }
        debug!("[probe{}] Loaded {} bytes", probe, data.len());
        Ok(data)
    }

    /// Convert a capture position to a nanosecond timestamp, rounded to the
    /// nearest nanosecond so fractional periods (e.g. 2.5 ns at 400 MHz) do
    /// not accumulate error
    #[inline]
    fn position_to_timestamp(&self, position: u64) -> i64 {
        (position as f64 * 1_000_000_000.0 / self.header.samplerate_hz).round() as i64
    }

    // ── Associated Functions (Helpers) ──────────────────────────────────

    /// Extract a single bit from a byte array at the given bit index
    #[inline]
    fn get_bit(data: &[u8], bit_index: usize) -> bool {
        let byte_index = bit_index / 8;
        let bit_offset = bit_index % 8;

        if byte_index < data.len() {
            (data[byte_index] >> bit_offset) & 1 == 1
        } else {
            false
        }
    }

    /// Parse a sample rate string (e.g., "50 MHz") into Hz.
    ///
    /// Zero, negative and non-finite rates are rejected.
    fn parse_sample_rate(samplerate: &str) -> Option<f64> {
        let parts: Vec<&str> = samplerate.split_whitespace().collect();
        if parts.len() >= 2
            && let Ok(value) = parts[0].parse::<f64>()
        {
            let multiplier = match parts[1] {
                "GHz" => 1_000_000_000.0,
                "MHz" => 1_000_000.0,
                "KHz" | "kHz" => 1_000.0,
                "Hz" => 1.0,
                _ => return None,
            };
            let hz = value * multiplier;
            return (hz.is_finite() && hz > 0.0).then_some(hz);
        }
        None
    }
}
