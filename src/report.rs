use std::io::{self, Write};

use crate::session::FileReport;
use crate::shared_types::WordCount;

pub(crate) const TOTAL_LABEL: &str = "total";
const ERROR_MARKER: &str = "#";

fn digits(n: WordCount) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Writes one line per report to `out`, failures to `err`, and a `total`
/// line when there is more than one report. Returns whether every input
/// was counted.
pub(crate) fn write_report<W: Write, E: Write>(
    reports: &[FileReport],
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    let total: WordCount = reports.iter().filter_map(|r| r.result.as_ref().ok()).sum();
    let show_total = reports.len() > 1;

    let widest = reports
        .iter()
        .filter_map(|r| r.result.as_ref().ok().copied())
        .chain(show_total.then_some(total))
        .max()
        .unwrap_or(0);
    let width = digits(widest);

    let mut all_ok = true;
    for report in reports {
        match &report.result {
            Ok(words) => writeln!(out, "{words:>width$} {}", report.name)?,
            Err(e) => {
                all_ok = false;
                writeln!(err, "{ERROR_MARKER:>width$} {e}")?;
            }
        }
    }
    if show_total {
        writeln!(out, "{total:>width$} {TOTAL_LABEL}")?;
    }
    out.flush()?;
    Ok(all_ok)
}
