//! Detection and parsing of Markdown pipe tables.
//!
//! Only the first table in the text is read. A table starts at the first
//! line that is followed by a separator row with the same number of cells,
//! so prose before the table is allowed. Rows after the separator are read
//! until the first line that does not start with `|`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::Grid;

static SEP_CELL_RE: LazyLock<Regex> =
    lazy_regex!(r"^:?-{3,}:?$", "valid separator cell regex");

static BR_RE: LazyLock<Regex> = lazy_regex!(r"(?i)<br\s*/?>", "valid line break regex");

/// A table read from Markdown.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Number of columns, taken from the header row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Convert back to a grid with the header as the first row.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.headers);
        grid.extend(self.rows);
        grid
    }
}

/// Split a Markdown table row into trimmed cells.
///
/// One leading and one trailing `|` are optional. A backslash escapes the
/// following character: `\|` yields a literal pipe and `\\` a single
/// backslash. Any other pair is kept as written, so `C:\dir` survives.
#[must_use]
pub fn split_cells(line: &str) -> Vec<String> {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix('|') {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix('|') {
        s = stripped;
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(next @ ('|' | '\\')) => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            '|' => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_string());
    cells
}

/// Turns `<br>` tags into newlines. Escapes were already resolved by
/// [`split_cells`].
fn sanitize_cell(cell: &str) -> String {
    BR_RE.replace_all(cell, "\n").trim().to_string()
}

/// Returns `true` if `cell` is a valid separator cell such as `---` or `:--:`.
fn is_separator_cell(cell: &str) -> bool {
    let compact: String = cell.chars().filter(|c| !c.is_whitespace()).collect();
    SEP_CELL_RE.is_match(&compact)
}

fn content_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.trim().is_empty()).collect()
}

/// Finds the first header line followed by a matching separator row.
///
/// Returns the header index and its sanitized cells. A header whose cells are
/// all empty once sanitized does not start a table.
fn find_header(lines: &[&str]) -> Option<(usize, Vec<String>)> {
    lines.windows(2).enumerate().find_map(|(idx, pair)| {
        let header: Vec<String> =
            split_cells(pair[0]).iter().map(|c| sanitize_cell(c)).collect();
        if header.iter().all(String::is_empty) {
            return None;
        }
        let sep = split_cells(pair[1]);
        if sep.len() != header.len() || !sep.iter().all(|c| is_separator_cell(c)) {
            return None;
        }
        trace!(line = idx + 1, columns = header.len(), "found table header");
        Some((idx, header))
    })
}

/// Returns `true` if `text` contains a Markdown table.
///
/// Agrees with [`parse_markdown_table`]: this is `true` exactly when parsing
/// returns `Some`.
///
/// # Examples
///
/// ```
/// assert!(tablepaste::is_markdown_table("| a |\n| --- |"));
/// assert!(!tablepaste::is_markdown_table("| a |\n| -- |"));
/// ```
#[must_use]
pub fn is_markdown_table(text: &str) -> bool {
    find_header(&content_lines(text)).is_some()
}

/// Parse the first Markdown table found in `text`.
///
/// Returns `None` when no header and separator pair is present. Escaped
/// pipes are unescaped and `<br>` tags become newlines. Rows are padded or
/// truncated to the header width.
#[must_use]
pub fn parse_markdown_table(text: &str) -> Option<ParsedTable> {
    let lines = content_lines(text);
    let (idx, headers) = find_header(&lines)?;
    let mut table = ParsedTable {
        headers,
        rows: Vec::new(),
    };
    let width = table.width();

    table.rows = lines[idx + 2..]
        .iter()
        .map(|l| l.trim())
        .take_while(|l| l.starts_with('|'))
        .map(|l| {
            let mut row: Vec<String> =
                split_cells(l).iter().map(|c| sanitize_cell(c)).collect();
            row.resize(width, String::new());
            row
        })
        .collect();

    debug!(columns = width, rows = table.rows.len(), "parsed markdown table");
    Some(table)
}
