//! Case-insensitive word frequency counting with a fixed-width top-N report.
//!
//! ```
//! use freq_words::{SortOrder, count_words};
//!
//! let mut table = count_words("The cat sat on the mat.".as_bytes()).unwrap();
//! table.sort(SortOrder::Frequency);
//! assert_eq!(table.entries()[0].text(), "The");
//! assert_eq!(table.entries()[0].count, 2);
//! ```

pub mod cli;
pub mod error;
pub mod rank;
pub mod report;
pub mod table;
pub mod tokenizer;

use std::io::{Read, Write};

use log::info;

pub use cli::{Cli, Config, Source};
pub use error::{FreqError, Result};
pub use rank::SortOrder;
pub use table::{FrequencyTable, WordEntry};
pub use tokenizer::Tokenizer;

/// Tokenizes `reader` to the end and counts every word.
pub fn count_words<R: Read>(reader: R) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new()?;
    for token in Tokenizer::new(reader) {
        table.insert_or_increment(&token?)?;
    }
    Ok(table)
}

/// Runs the whole pipeline for `config` and writes the report to `out`.
/// Returns the total printed on the report's last line.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<u64> {
    let mut table = count_words(config.source.open()?)?;
    info!(
        "{} words, {} distinct, in {}",
        table.total(),
        table.len(),
        config.source.label()
    );

    table.sort(SortOrder::Frequency);
    report::write_report(out, &config.source.label(), &table, config.top).map_err(FreqError::Write)
}
