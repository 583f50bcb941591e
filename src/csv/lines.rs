//! Reassemble logical lines from physical ones.
//!
//! A quoted field may hold a literal newline, which splits one row over several
//! physical lines. A line holding an odd number of quotes is still inside such a
//! field, so the following physical line is glued back onto it.

use tracing::trace;

pub const QUOTE: char = '"';

pub fn count_quotes(text: &str) -> usize {
    text.matches(QUOTE).count()
}

/// Split on `\n`, `\r\n` and `\r`. Empty text yields no lines.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = (!text.is_empty()).then_some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(|ch: char| ch == '\n' || ch == '\r') {
            Some(end) => {
                let width = if current[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[end + width..]);
                Some(&current[..end])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Iterate over the logical lines of `text`.
///
/// Physical lines are rejoined with a single `\n` whatever their original line
/// ending. The caller must have checked that `text` holds an even number of
/// quotes; otherwise the last line simply absorbs everything left.
pub fn logical_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    let mut physical = physical_lines(text);
    std::iter::from_fn(move || {
        let mut line = physical.next()?.to_string();
        let mut quotes = count_quotes(&line);
        while quotes % 2 == 1 {
            let Some(next) = physical.next() else {
                break;
            };
            trace!(quotes, "quoted field continues on the next physical line");
            line.push('\n');
            line.push_str(next);
            quotes += count_quotes(next);
        }
        Some(line)
    })
}
