mod csv;
mod errors;

pub use csv::{
    parse, parse_bytes, parse_reader, stringify, stringify_to, ParseOptions, Record, Row,
    StringifyOptions, Table,
};
pub use errors::{CsvError, Result};

/// Location of a field in the input, both 1-based.
///
/// `line` counts logical lines, so a quoted field spanning several physical
/// lines still belongs to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}
