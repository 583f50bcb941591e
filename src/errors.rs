use crate::Position;
use std::io;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid encoding: {0}")]
    Encoding(String),

    #[error("Invalid CSV, odd number of quotes found: {count}. Ensure each quote has been enclosed.")]
    UnbalancedQuotes { count: usize },

    #[error("Unescaped quote{} in line {}", plural(.count), .position.line)]
    UnescapedQuote { position: Position, count: usize },

    #[error(
        "Escaped quote{} in a field unenclosed with quotes in line {}",
        plural(.count),
        .position.line
    )]
    EscapedQuoteOutsideQuotedField { position: Position, count: usize },
}

fn plural(count: &usize) -> &'static str {
    if *count > 1 {
        "s"
    } else {
        ""
    }
}

impl From<io::Error> for CsvError {
    fn from(error: io::Error) -> Self {
        CsvError::Io(error.to_string())
    }
}

impl From<std::str::Utf8Error> for CsvError {
    fn from(error: std::str::Utf8Error) -> Self {
        CsvError::Encoding(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CsvError>;
