//! Error types for the word frequency pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure is fatal to a run; `main` reports it and exits.
#[derive(Error, Debug)]
pub enum FreqError {
    #[error("file open failed '{}': {source}", .path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid argument for number of words: '{value}'")]
    InvalidArgument { value: String },

    #[error("word exceeds {max} characters")]
    TokenTooLong { max: usize },

    #[error("word table cannot grow to {requested} entries: memory exhausted")]
    AllocationExhausted { requested: usize },

    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, FreqError>;
