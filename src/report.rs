use std::io::{self, Write};

use crate::analysis::ModeAnalysis;
use crate::error::{AnalysisError, Result};
use crate::processing::statistics::StatisticsRecord;
use crate::state::mode::Mode;

/// Write one mode's block: a `<Mode>:` header, a `Key: Value` line per
/// statistic and a trailing blank line.
pub fn write_block<W: Write>(
    out: &mut W,
    mode: Mode,
    stats: &StatisticsRecord,
) -> io::Result<()> {
    writeln!(out, "{}:", mode.label())?;
    for (key, value) in stats.entries() {
        writeln!(out, "{}: {value}", key.label())?;
    }
    writeln!(out)
}

pub fn write_report<W: Write>(out: &mut W, analyses: &[ModeAnalysis]) -> io::Result<()> {
    for analysis in analyses {
        write_block(out, analysis.series.mode(), &analysis.stats)?;
    }
    out.flush()
}

/// Write the report to `out`, labelling write failures with `target`.
pub fn emit<W: Write>(out: &mut W, target: &str, analyses: &[ModeAnalysis]) -> Result<()> {
    write_report(out, analyses).map_err(|source| AnalysisError::Io {
        path: target.into(),
        source,
    })
}

/// Print the report to standard output.
pub fn print(analyses: &[ModeAnalysis]) -> Result<()> {
    emit(&mut io::stdout().lock(), "<stdout>", analyses)
}
