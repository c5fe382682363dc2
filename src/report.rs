//! CSV reports
//!
//! Four files per analysis: complete commands, command/address rejects, hold-time
//! statistics and the AC detect log. Hold times are written with two decimals;
//! values that do not apply are written as empty fields.

use crate::Result;
use crate::decoders::{AcDetectLog, Analysis, CmdAddrReject, CommandName, HoldStats, ValidCmdRow};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Destinations of the four reports
#[derive(Debug, Clone)]
pub struct ReportPaths<P> {
    pub complete: P,
    pub rejects: P,
    pub stats: P,
    pub detects: P,
}

impl<P: AsRef<Path>> ReportPaths<P> {
    /// Write every report of `analysis`
    pub fn write_all(&self, analysis: &Analysis) -> Result<()> {
        write_file(&self.complete, |w| write_complete_cmds(w, &analysis.complete))?;
        write_file(&self.rejects, |w| write_reject_log(w, &analysis.rejects))?;
        write_file(&self.stats, |w| {
            write_ac_stats(w, analysis.tcmdh_stats(), analysis.taddh_stats())
        })?;
        write_file(&self.detects, |w| write_detect_log(w, &analysis.detects))?;
        Ok(())
    }
}

fn write_file<P, F>(path: P, body: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    body(&mut writer)?;
    writer.flush()?;
    debug!("Wrote {}", path.display());
    Ok(())
}

fn fmt2(value: f64) -> String {
    format!("{:.2}", value)
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(fmt2).unwrap_or_default()
}

fn parent_name(name: Option<CommandName>) -> &'static str {
    name.map_or("", CommandName::as_str)
}

/// `Time,CMD,ADD1..ADD6`
pub fn write_complete_cmds<W: Write>(w: &mut W, rows: &[ValidCmdRow]) -> std::io::Result<()> {
    writeln!(w, "Time,CMD,ADD1,ADD2,ADD3,ADD4,ADD5,ADD6")?;
    for row in rows {
        writeln!(w, "{},{},{}", row.time_ns, row.command, row.addresses.join(","))?;
    }
    Ok(())
}

/// `Time,Kind,Reason,Code,TAC(ns),ParentCmdTime,ParentCmdName`
pub fn write_reject_log<W: Write>(w: &mut W, rejects: &[CmdAddrReject]) -> std::io::Result<()> {
    writeln!(w, "Time,Kind,Reason,Code,TAC(ns),ParentCmdTime,ParentCmdName")?;
    for r in rejects {
        writeln!(
            w,
            "{},{},{},{},{},{},{}",
            r.time_ns,
            r.kind,
            r.reason,
            r.code,
            fmt_opt(r.hold_ns),
            r.parent_cmd_time,
            parent_name(r.parent_cmd_name)
        )?;
    }
    Ok(())
}

/// Header row plus one row each for tCMDH and tADDH
pub fn write_ac_stats<W: Write>(
    w: &mut W,
    tcmdh: Option<HoldStats>,
    taddh: Option<HoldStats>,
) -> std::io::Result<()> {
    writeln!(w, ",AVG,MIN,MAX,STDV")?;
    for (label, stats) in [("tCMDH", tcmdh), ("tADDH", taddh)] {
        match stats {
            Some(s) => writeln!(
                w,
                "{},{},{},{},{}",
                label,
                fmt2(s.avg),
                fmt2(s.min),
                fmt2(s.max),
                fmt2(s.std)
            )?,
            None => writeln!(w, "{},,,,", label)?,
        }
    }
    Ok(())
}

/// `Time,Stage,Name,Code,TAC(ns),ParentCmdTime,ParentCmdName`
pub fn write_detect_log<W: Write>(w: &mut W, detects: &[AcDetectLog]) -> std::io::Result<()> {
    writeln!(w, "Time,Stage,Name,Code,TAC(ns),ParentCmdTime,ParentCmdName")?;
    for d in detects {
        writeln!(
            w,
            "{},{},{},{},{},{},{}",
            d.time_ns,
            d.stage,
            d.name,
            d.code,
            fmt2(d.hold_ns),
            d.parent_cmd_time,
            parent_name(d.parent_cmd_name)
        )?;
    }
    Ok(())
}
