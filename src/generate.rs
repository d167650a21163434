//! Markdown pipe-table generation.

/// How line breaks inside a cell are written to Markdown.
///
/// Pipe tables cannot hold a literal newline, so one has to be replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineBreaks {
    /// Replace each line break with a single space.
    #[default]
    Space,
    /// Replace each line break with a `<br>` tag, which most renderers
    /// display as a break and which [`parse_markdown_table`](crate::parse_markdown_table)
    /// turns back into a newline.
    HtmlBreak,
}

/// Options controlling Markdown output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub line_breaks: LineBreaks,
}

/// Escapes `|`, and a backslash that would otherwise be read as escaping
/// the next `|` or `\\`. Other backslashes are written as they are.
fn escape_pipes(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len());
    let mut chars = cell.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '|' => out.push_str("\\|"),
            '\\' if matches!(chars.peek(), Some('|' | '\\')) => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_cell(cell: &str, opts: &GenerateOptions) -> String {
    let brk = match opts.line_breaks {
        LineBreaks::Space => " ",
        LineBreaks::HtmlBreak => "<br>",
    };
    let joined = cell.replace("\r\n", brk).replace(['\n', '\r'], brk);
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        " ".to_string()
    } else {
        escape_pipes(trimmed)
    }
}

fn format_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    width: usize,
    opts: &GenerateOptions,
) -> String {
    let mut out: Vec<String> = cells.map(|c| escape_cell(c, opts)).collect();
    out.resize(width, " ".to_string());
    format!("| {} |\n", out.join(" | "))
}

/// Render `grid` as a Markdown table using the default options.
///
/// The first row becomes the header. See [`generate_markdown_with`].
#[must_use]
pub fn generate_markdown(grid: &[Vec<String>]) -> String {
    generate_markdown_with(grid, &GenerateOptions::default())
}

/// Render `grid` as a Markdown table.
///
/// Every row is padded to the widest row. Pipes are escaped, line breaks are
/// replaced according to `opts`, and empty cells are written as a single
/// space. Each output line, including the last, ends with `\n`. An empty grid
/// produces an empty string.
///
/// # Examples
///
/// ```
/// use tablepaste::{generate_markdown, grid};
///
/// let md = generate_markdown(&grid![["a", "b"], ["c"]]);
/// assert_eq!(md, "| a | b |\n| --- | --- |\n| c |   |\n");
/// ```
#[must_use]
pub fn generate_markdown_with(grid: &[Vec<String>], opts: &GenerateOptions) -> String {
    let Some((header, rows)) = grid.split_first() else {
        return String::new();
    };
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = format_row(header.iter().map(String::as_str), width, opts);
    out.push_str(&format!("| {} |\n", vec!["---"; width].join(" | ")));
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str), width, opts));
    }
    out
}
