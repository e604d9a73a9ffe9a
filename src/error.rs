use std::path::PathBuf;
use thiserror::Error;

use crate::driver::parse::Keyword;

/// Rejections raised while turning text into a `Sequence` or `Pattern`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("empty sequence")]
    Empty,

    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Errors from reading or interpreting a command file.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("malformed command line: {0:?}")]
    Malformed(String),

    #[error("{0} requires an operand")]
    MissingOperand(Keyword),

    #[error("invalid operand for {keyword}: {source}")]
    InvalidOperand {
        keyword: Keyword,
        #[source]
        source: SequenceError,
    },

    #[error("unknown print option {0:?}")]
    UnknownPrintOption(String),

    #[error("failed to read command file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read command: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
