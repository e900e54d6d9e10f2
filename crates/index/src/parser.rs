//! Line parser for `FILE_INDEX_SHA256.txt`

use crate::IndexEntry;
use fidx_errors::IndexError;

/// Parse index text into entries, in file order.
///
/// Lines end at any Unicode line boundary, with `\r\n` counted as one.
/// Blank lines and `#` comments are skipped. Every other line must hold a
/// digest followed by a path; the path is every token after the digest,
/// joined with single spaces. Duplicate paths are kept as separate entries.
///
/// # Errors
/// Returns [`IndexError::Parse`] for the first line that has a digest but
/// no path.
pub fn parse_index(text: &str) -> Result<Vec<IndexEntry>, IndexError> {
    let mut entries = Vec::new();

    for (i, raw) in split_lines(text).enumerate() {
        let line_no = i + 1;
        let line = raw.trim_matches(is_blank);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split(is_blank).filter(|t| !t.is_empty());
        let (Some(digest), Some(first)) = (tokens.next(), tokens.next()) else {
            return Err(IndexError::Parse {
                line: line_no,
                content: line.to_string(),
            });
        };

        let mut path = first.to_string();
        for token in tokens {
            path.push(' ');
            path.push_str(token);
        }

        entries.push(IndexEntry::new(digest, &path, line_no));
    }

    tracing::debug!(entries = entries.len(), "parsed file index");
    Ok(entries)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Unicode whitespace plus the ASCII information separators
fn is_blank(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Split at every line boundary; a trailing boundary does not start a new line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(is_line_break) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let tail = &rest[end..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
        Some(line)
    })
}
