//! Parsing of tab-separated clipboard text.
//!
//! Spreadsheets copy a selection as one line per row with cells separated by
//! tabs. Cells that contain line breaks, tabs or quotes are wrapped in double
//! quotes and embedded quotes are doubled. Text surrounding the table (a
//! heading line pasted along with the selection, notes below it) is skipped.

use tracing::{debug, trace};

use crate::{ConvertError, Grid};

/// Where the parser is within the current cell.
enum CellState {
    Normal,
    /// Inside a quoted cell that has not seen its closing quote yet.
    Quoted { buf: String },
}

/// Accumulates rows line by line.
struct GridBuilder {
    rows: Grid,
    cells: Vec<String>,
    state: CellState,
}

impl GridBuilder {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            cells: Vec::new(),
            state: CellState::Normal,
        }
    }

    fn in_quoted_cell(&self) -> bool {
        matches!(self.state, CellState::Quoted { .. })
    }

    fn push_line(&mut self, line: &str) {
        for (idx, segment) in line.split('\t').enumerate() {
            let state = std::mem::replace(&mut self.state, CellState::Normal);
            self.state = match state {
                CellState::Normal => self.start_cell(segment),
                CellState::Quoted { mut buf } => {
                    buf.push(if idx == 0 { '\n' } else { '\t' });
                    self.continue_cell(buf, segment)
                }
            };
        }
        if !self.in_quoted_cell() {
            self.rows.push(std::mem::take(&mut self.cells));
        }
    }

    fn start_cell(&mut self, segment: &str) -> CellState {
        let lead = segment.trim_start();
        let Some(rest) = lead.strip_prefix('"') else {
            self.cells.push(segment.trim().to_string());
            return CellState::Normal;
        };
        let body = rest.trim_end();
        if closes_quote(body) {
            self.cells.push(unescape_quotes(&body[..body.len() - 1]));
            CellState::Normal
        } else {
            CellState::Quoted {
                buf: rest.to_string(),
            }
        }
    }

    fn continue_cell(&mut self, mut buf: String, segment: &str) -> CellState {
        let body = segment.trim_end();
        if closes_quote(body) {
            buf.push_str(&body[..body.len() - 1]);
            self.cells.push(unescape_quotes(&buf));
            CellState::Normal
        } else {
            buf.push_str(segment);
            CellState::Quoted { buf }
        }
    }

    fn finish(mut self) -> Grid {
        if let CellState::Quoted { buf } = self.state {
            trace!("flushing unterminated quoted cell");
            self.cells.push(unescape_quotes(&buf));
            self.rows.push(self.cells);
        }
        self.rows
    }
}

/// Returns `true` if `segment` ends with a quote that is not half of an
/// escaped `""` pair.
fn closes_quote(segment: &str) -> bool {
    segment.chars().rev().take_while(|&c| c == '"').count() % 2 == 1
}

fn unescape_quotes(cell: &str) -> String {
    cell.replace("\"\"", "\"")
}

/// Strips whitespace-only lines from both ends of `raw`.
///
/// Tabs on the first and last non-blank lines are kept because they mark
/// empty leading or trailing cells.
fn trim_blank_lines(raw: &str) -> &str {
    let start = raw
        .find(|c: char| !c.is_whitespace())
        .map_or(0, |i| raw[..i].rfind('\n').map_or(0, |nl| nl + 1));
    let end = raw
        .rfind(|c: char| !c.is_whitespace())
        .map_or(raw.len(), |i| raw[i..].find('\n').map_or(raw.len(), |nl| i + nl));
    &raw[start..end]
}

/// Parse tab-separated clipboard text into a grid.
///
/// Only the first run of tab-containing lines is read. Rows keep whatever
/// length they had in the input; [`generate_markdown`](crate::generate_markdown)
/// pads them.
///
/// Only blank lines are trimmed from the ends of `raw`, not all whitespace:
/// a leading or trailing tab marks an empty first or last cell and is kept.
///
/// # Errors
/// Returns [`ConvertError::EmptyInput`] if `raw` is blank and
/// [`ConvertError::NoValidData`] if no row has any content.
///
/// # Examples
///
/// ```
/// let grid = tablepaste::parse_tabular("a\tb\nc\td").unwrap();
/// assert_eq!(grid, tablepaste::grid![["a", "b"], ["c", "d"]]);
/// ```
pub fn parse_tabular(raw: &str) -> Result<Grid, ConvertError> {
    if raw.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let mut builder = GridBuilder::new();
    let mut in_table = false;
    for (num, line) in trim_blank_lines(raw).split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if builder.in_quoted_cell() || line.contains('\t') {
            in_table = true;
            builder.push_line(line);
        } else if in_table {
            trace!(line = num + 1, "table ended");
            break;
        } else {
            trace!(line = num + 1, "skipping line before table");
        }
    }

    let rows = builder.finish();
    if rows.iter().all(|row| row.iter().all(String::is_empty)) {
        return Err(ConvertError::NoValidData);
    }
    debug!(rows = rows.len(), "parsed tab-separated text");
    Ok(rows)
}
