use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::error::{FreqError, Result};

#[derive(Parser, Debug)]
#[command(
    name = "freq_words",
    author,
    version,
    about = "Report the most frequent words in a text file.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Text file to read. `-` always means standard input; name a file
    /// called `-` as `./-`
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of words to report; 0 or nothing reports every word
    #[arg(value_name = "COUNT", value_parser = parse_count)]
    pub count: Option<usize>,
}

pub fn parse_count(src: &str) -> Result<usize> {
    src.parse().map_err(|_| FreqError::InvalidArgument {
        value: src.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Stdin,
}

impl Source {
    /// Name printed in the report header.
    pub fn label(&self) -> String {
        match self {
            Source::Path(path) => path.display().to_string(),
            Source::Stdin => "stdin".to_string(),
        }
    }

    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Source::Path(path) => {
                let file = File::open(path).map_err(|source| FreqError::FileOpenFailure {
                    path: path.clone(),
                    source,
                })?;
                debug!("reading {}", path.display());
                Ok(Box::new(BufReader::new(file)))
            }
            Source::Stdin => {
                debug!("reading standard input");
                Ok(Box::new(BufReader::new(io::stdin().lock())))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    /// Entries to report, 0 for all.
    pub top: usize,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = if cli.file.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::Path(cli.file)
        };
        Config {
            source,
            top: cli.count.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn config(args: &[&str]) -> Config {
        Cli::try_parse_from(args).unwrap().into()
    }

    #[test]
    fn file_only_reports_everything() {
        assert_eq!(
            config(&["freq_words", "book.txt"]),
            Config {
                source: Source::Path(PathBuf::from("book.txt")),
                top: 0,
            }
        );
    }

    #[test]
    fn count_is_parsed() {
        assert_eq!(config(&["freq_words", "book.txt", "25"]).top, 25);
        assert_eq!(config(&["freq_words", "book.txt", "0"]).top, 0);
    }

    #[test]
    fn dash_reads_stdin() {
        let config = config(&["freq_words", "-", "3"]);
        assert_eq!(config.source, Source::Stdin);
        assert_eq!(config.source.label(), "stdin");
    }

    #[test]
    fn dotted_dash_is_a_file() {
        assert_eq!(
            config(&["freq_words", "./-"]).source,
            Source::Path(PathBuf::from("./-"))
        );
    }

    #[test]
    fn help_mentions_dash_file() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("./-"), "{help}");
    }

    #[test]
    fn file_is_required() {
        let err = Cli::try_parse_from(["freq_words"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn bad_counts_are_rejected() {
        for bad in ["ten", "-1", "3.5", "99999999999999999999999"] {
            let err = Cli::try_parse_from(["freq_words", "book.txt", bad]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_count_reports_the_value() {
        match parse_count("abc") {
            Err(FreqError::InvalidArgument { value }) => assert_eq!(value, "abc"),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_fails_to_open() {
        let source = Source::Path(PathBuf::from("/definitely/not/here.txt"));
        match source.open() {
            Err(FreqError::FileOpenFailure { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.txt"))
            }
            Err(other) => panic!("unexpected error {other:?}"),
            Ok(_) => panic!("opened a missing file"),
        }
    }
}
