//! Line parsing for results files
//!
//! Each meaningful line of a results file is a key-value pair separated by a
//! single colon.
//!
//! Grammar: `<line> = <key> ":" <value>`
//!
//! The whole line is stripped of surrounding whitespace before splitting; no
//! per-field trimming happens after the split, so interior whitespace around
//! the colon stays part of the key or value. A line that does not split into
//! exactly two parts on `:` is malformed and contributes nothing: that covers
//! blank lines, lines with no colon, and lines with two or more colons
//! (`a:b:c` is rejected outright, not split at the first colon).

use indexmap::IndexMap;

/// Accumulated key/value pairs from a results file.
///
/// Keys are unique; a key appearing on multiple lines keeps its last value.
/// Iteration yields keys in order of first insertion.
pub type Params = IndexMap<String, String>;

/// Split a single line into its key and value.
///
/// Returns `None` for malformed lines. The returned slices borrow from the
/// stripped interior of `line`.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let stripped = line.trim();
    let mut parts = stripped.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Some((key, value)),
        _ => None,
    }
}

/// Parse an iterator of lines into a parameter mapping.
///
/// Malformed lines are skipped silently; a partially malformed input still
/// yields whatever parsed.
pub fn parse_lines<'a, I>(lines: I) -> Params
where
    I: IntoIterator<Item = &'a str>,
{
    parse_lines_reporting(lines, |_| {})
}

/// Like [`parse_lines`], but invokes `on_skip` with the stripped text of
/// every line that fails to parse.
///
/// The CLI routes its `--verbose` diagnostics through this; [`parse_lines`]
/// is the same fold with a no-op callback.
pub fn parse_lines_reporting<'a, I, F>(lines: I, mut on_skip: F) -> Params
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str),
{
    let mut params = Params::new();
    for line in lines {
        match parse_line(line) {
            Some((key, value)) => {
                params.insert(key.to_string(), value.to_string());
            }
            None => on_skip(line.trim()),
        }
    }
    params
}
