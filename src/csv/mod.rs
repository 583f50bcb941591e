//! Convert between rows of text fields and CSV text
//!
//! Parsing runs in two steps. Raw text is first cut into logical lines, gluing
//! back physical lines that a quoted field split with a literal newline. Each
//! logical line is then tokenized into fields on its own.
//!
//! Input is all-or-nothing: malformed quoting fails the whole call and no
//! partial table is returned.
mod lines;
mod options;
mod table;
mod tokenizer;
mod writer;

pub use options::{ParseOptions, StringifyOptions};
pub use table::{Record, Row, Table};

use crate::errors::{CsvError, Result};
use std::io::{Read, Write};
use tracing::debug;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Serialize rows to CSV text.
pub fn stringify<I, R, F>(rows: I, opts: &StringifyOptions) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<str>,
{
    writer::write_rows(rows, opts)
}

/// Serialize rows to CSV and write them to `sink`.
pub fn stringify_to<W, I, R, F>(mut sink: W, rows: I, opts: &StringifyOptions) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<str>,
{
    sink.write_all(stringify(rows, opts).as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Parse CSV text into a table.
///
/// Fails with [`CsvError::UnbalancedQuotes`] before reading any row if the text
/// holds an odd number of quotes.
pub fn parse(text: &str, opts: &ParseOptions) -> Result<Table> {
    let quotes = lines::count_quotes(text);
    if quotes % 2 == 1 {
        return Err(CsvError::UnbalancedQuotes { count: quotes });
    }

    let mut logical = lines::logical_lines(text.trim_end())
        .enumerate()
        .map(|(index, line)| (index + 1, line));
    if opts.skip_header {
        logical.next();
    }
    let tokenize = |(number, line): (usize, String)| {
        tokenizer::tokenize_line(&line, number, opts.delimiter, opts.trim)
    };

    if !opts.return_object {
        let rows = logical.map(tokenize).collect::<Result<Vec<_>>>()?;
        debug!(rows = rows.len(), "parsed csv rows");
        return Ok(Table::Rows(rows));
    }

    let header = match &opts.header_keys {
        Some(keys) => keys.clone(),
        None => match logical.next() {
            Some(line) => tokenize(line)?,
            None => return Ok(Table::Records(Vec::new())),
        },
    };
    debug!(?header, "parsing csv records");
    let records = logical
        .map(|line| tokenize(line).map(|fields| table::to_record(&header, fields)))
        .collect::<Result<Vec<_>>>()?;
    debug!(records = records.len(), "parsed csv records");
    Ok(Table::Records(records))
}

/// Parse a UTF-8 buffer, ignoring a leading byte order mark.
pub fn parse_bytes(bytes: &[u8], opts: &ParseOptions) -> Result<Table> {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    parse(std::str::from_utf8(bytes)?, opts)
}

/// Read `reader` to the end and parse what it held.
pub fn parse_reader<R: Read>(mut reader: R, opts: &ParseOptions) -> Result<Table> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    parse_bytes(&buffer, opts)
}
