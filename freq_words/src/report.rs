//! Fixed-width top-N report.

use std::io::{self, Write};

use crate::table::FrequencyTable;
use crate::tokenizer::MAX_WORD_LEN;

/// Number of entries a report for `top` prints. `0` means all of them.
pub fn shown(top: usize, distinct: usize) -> usize {
    if top == 0 {
        distinct
    } else {
        top.min(distinct)
    }
}

/// Writes the report for the first `top` entries of `table` as currently
/// ordered and returns the sum of the printed counts.
pub fn write_report<W: Write>(
    out: &mut W,
    source: &str,
    table: &FrequencyTable,
    top: usize,
) -> io::Result<u64> {
    writeln!(out, "'{}' contained '{}' words.\n", source, table.len())?;

    let mut total = 0;
    for entry in &table.entries()[..shown(top, table.len())] {
        let text = entry.text();
        writeln!(out, "  {text:<width$}    {:>5}", entry.count, width = MAX_WORD_LEN)?;
        total += entry.count;
    }

    writeln!(out, "{:33}------", "")?;
    writeln!(out, "{:>34}{:>5}", "Total: ", total)?;
    out.flush()?;
    Ok(total)
}
