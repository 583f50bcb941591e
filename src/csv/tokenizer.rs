//! Split one logical line into fields.
//!
//! Each field is read by a small state machine, one character at a time. A
//! quote only opens a field when it is the field's first character; anywhere
//! else in an unquoted field it is counted as a mistake and reported once the
//! field is complete.

use super::lines::QUOTE;
use crate::errors::{CsvError, Result};
use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing read for the current field yet.
    Start,
    Unquoted,
    QuotedOpen,
    /// Saw a quote inside a quoted field: either the closing quote or the
    /// first half of an escaped one.
    QuotedPendingClose,
    /// Text after the closing quote, which makes that quote a bare one.
    AfterClose,
}

/// A field as read off the line, before it is checked.
#[derive(Debug)]
struct RawField {
    value: String,
    column: usize,
    quoted: bool,
    bare_quotes: usize,
    escaped_quotes: usize,
}

impl RawField {
    fn starting_at(column: usize) -> Self {
        Self {
            value: String::new(),
            column,
            quoted: false,
            bare_quotes: 0,
            escaped_quotes: 0,
        }
    }

    fn finish(self, line: usize, trim: bool) -> Result<String> {
        let position = Position {
            line,
            column: self.column,
        };
        if self.bare_quotes > 0 {
            return Err(CsvError::UnescapedQuote {
                position,
                count: self.bare_quotes,
            });
        }
        if !self.quoted && self.escaped_quotes > 0 {
            return Err(CsvError::EscapedQuoteOutsideQuotedField {
                position,
                count: self.escaped_quotes,
            });
        }
        if trim {
            Ok(self.value.trim().to_string())
        } else {
            Ok(self.value)
        }
    }
}

/// Split `line` into its fields.
///
/// `line_number` is the 1-based logical line number used in errors. Quoted
/// fields may contain the delimiter, newlines and doubled quotes; the
/// surrounding quotes are removed and doubled quotes collapse to one.
pub fn tokenize_line(
    line: &str,
    line_number: usize,
    delimiter: char,
    trim: bool,
) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = RawField::starting_at(1);
    let mut state = State::Start;
    let mut chars = line.chars().enumerate().peekable();

    while let Some((index, ch)) = chars.next() {
        state = match state {
            State::Start if ch == QUOTE => {
                field.quoted = true;
                State::QuotedOpen
            }
            State::Start | State::Unquoted | State::QuotedPendingClose | State::AfterClose
                if ch == delimiter =>
            {
                let done = std::mem::replace(&mut field, RawField::starting_at(index + 2));
                fields.push(done.finish(line_number, trim)?);
                State::Start
            }
            State::Start | State::Unquoted => {
                if ch == QUOTE {
                    if chars.next_if(|&(_, next)| next == QUOTE).is_some() {
                        field.escaped_quotes += 1;
                        field.value.push(QUOTE);
                    } else {
                        field.bare_quotes += 1;
                    }
                }
                field.value.push(ch);
                State::Unquoted
            }
            State::QuotedOpen if ch == QUOTE => State::QuotedPendingClose,
            State::QuotedOpen => {
                field.value.push(ch);
                State::QuotedOpen
            }
            State::QuotedPendingClose if ch == QUOTE => {
                field.value.push(QUOTE);
                State::QuotedOpen
            }
            State::QuotedPendingClose => {
                field.bare_quotes += 1;
                field.value.push(QUOTE);
                field.value.push(ch);
                State::AfterClose
            }
            State::AfterClose => {
                if ch == QUOTE {
                    field.bare_quotes += 1;
                }
                field.value.push(ch);
                State::AfterClose
            }
        };
    }

    // An opening quote that never closed.
    if state == State::QuotedOpen {
        field.bare_quotes += 1;
    }
    fields.push(field.finish(line_number, trim)?);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str) -> Vec<String> {
        tokenize_line(line, 1, ',', false).unwrap()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_plain_fields() {
        assert_eq!(fields("a,b,c"), strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(fields("a,,b"), strings(&["a", "", "b"]));
        assert_eq!(fields(",,"), strings(&["", "", ""]));
        assert_eq!(fields("a,"), strings(&["a", ""]));
        assert_eq!(fields(""), strings(&[""]));
    }

    #[test]
    fn test_quoted_fields() {
        assert_eq!(fields("\"a,b\",c"), strings(&["a,b", "c"]));
        assert_eq!(fields("x,\"y\nz\""), strings(&["x", "y\nz"]));
        assert_eq!(fields("\"\",b"), strings(&["", "b"]));
    }

    #[test]
    fn test_doubled_quotes_inside_quoted_field() {
        assert_eq!(fields("abc,\"x\"\"y\"\"z\""), strings(&["abc", "x\"y\"z"]));
        assert_eq!(fields("\"\"\"a\"\"\",b"), strings(&["\"a\"", "b"]));
        assert_eq!(fields("a,\"\"\"\""), strings(&["a", "\""]));
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(
            tokenize_line("a;\"b;c\";d", 1, ';', false).unwrap(),
            strings(&["a", "b;c", "d"])
        );
        assert_eq!(
            tokenize_line("a,b\tc", 1, '\t', false).unwrap(),
            strings(&["a,b", "c"])
        );
    }

    #[test]
    fn test_trim() {
        assert_eq!(
            tokenize_line(" a , b ,\" c \"", 1, ',', true).unwrap(),
            strings(&["a", "b", "c"])
        );
        assert_eq!(fields(" a , b "), strings(&[" a ", " b "]));
    }

    #[test]
    fn test_unescaped_quote_in_unquoted_field() {
        assert_eq!(
            tokenize_line("abc,x\"y\"z", 4, ',', false).unwrap_err(),
            CsvError::UnescapedQuote {
                position: Position { line: 4, column: 5 },
                count: 2
            }
        );
    }

    #[test]
    fn test_escaped_quote_outside_quoted_field() {
        assert_eq!(
            tokenize_line("abc,x\"\"y\"\"z", 2, ',', false).unwrap_err(),
            CsvError::EscapedQuoteOutsideQuotedField {
                position: Position { line: 2, column: 5 },
                count: 2
            }
        );
    }

    #[test]
    fn test_bare_quote_wins_over_escaped_quote() {
        assert_eq!(
            tokenize_line("x\"\"y\"z", 1, ',', false).unwrap_err(),
            CsvError::UnescapedQuote {
                position: Position { line: 1, column: 1 },
                count: 1
            }
        );
    }

    #[test]
    fn test_text_after_closing_quote() {
        assert_eq!(
            tokenize_line("a,\"b\"c,d", 1, ',', false).unwrap_err(),
            CsvError::UnescapedQuote {
                position: Position { line: 1, column: 3 },
                count: 1
            }
        );
    }

    #[test]
    fn test_space_before_opening_quote_is_unquoted() {
        assert_eq!(
            tokenize_line("a, \"b\"", 1, ',', true).unwrap_err(),
            CsvError::UnescapedQuote {
                position: Position { line: 1, column: 3 },
                count: 2
            }
        );
    }

    #[test]
    fn test_unterminated_quoted_field() {
        assert_eq!(
            tokenize_line("a,\"b", 1, ',', false).unwrap_err(),
            CsvError::UnescapedQuote {
                position: Position { line: 1, column: 3 },
                count: 1
            }
        );
    }
}
