use super::lines::QUOTE;
use super::options::StringifyOptions;
use itertools::Itertools;
use std::borrow::Cow;

/// Escape and, when needed, quote a single field.
///
/// Quotes are doubled; the field is then wrapped in quotes if `quote_all` is set
/// or it holds the delimiter, a quote, or a line break.
pub fn quote_field<'a>(field: &'a str, opts: &StringifyOptions) -> Cow<'a, str> {
    let escaped = if field.contains(QUOTE) {
        Cow::Owned(field.replace(QUOTE, "\"\""))
    } else {
        Cow::Borrowed(field)
    };
    let special = |ch: char| ch == opts.delimiter || ch == QUOTE || ch == '\n' || ch == '\r';
    let needs_quotes = opts.quote_all || escaped.contains(special);
    if needs_quotes {
        Cow::Owned(format!("{QUOTE}{escaped}{QUOTE}"))
    } else {
        escaped
    }
}

/// Render rows as CSV text, every row followed by `\n`.
pub fn write_rows<I, R, F>(rows: I, opts: &StringifyOptions) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<str>,
{
    let separator = opts.delimiter.to_string();
    rows.into_iter().fold(String::new(), |mut csv, row| {
        let line = row
            .into_iter()
            .format_with(&separator, |field, f| f(&quote_field(field.as_ref(), opts)));
        csv.push_str(&line.to_string());
        csv.push('\n');
        csv
    })
}
