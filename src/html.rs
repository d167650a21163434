//! Rendering of parsed tables as HTML.
//!
//! The output is a single `<table>` element with one header row in `<thead>`
//! and the data rows in `<tbody>`, one element per line with two-space
//! indentation. It is meant to be pasted into rich-text editors, so empty
//! cells are written as `&nbsp;` to keep them visible.

use crate::ParsedTable;

fn escape_html(text: &str) -> String {
    // `&` first, otherwise the entities below would be escaped again.
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn render_cell(content: &str) -> String {
    let escaped = escape_html(content).replace('\n', "<br />");
    if escaped.is_empty() {
        "&nbsp;".to_string()
    } else {
        escaped
    }
}

fn push_row(out: &mut Vec<String>, cells: &[String], tag: &str) {
    out.push("    <tr>".to_string());
    for cell in cells {
        out.push(format!("      <{tag}>{}</{tag}>", render_cell(cell)));
    }
    out.push("    </tr>".to_string());
}

/// Render `table` as an HTML `<table>`.
///
/// # Examples
///
/// ```
/// use tablepaste::{ParsedTable, render_html_table};
///
/// let table = ParsedTable {
///     headers: vec!["a & b".into()],
///     rows: vec![vec![String::new()]],
/// };
/// let html = render_html_table(&table);
/// assert!(html.contains("<th>a &amp; b</th>"));
/// assert!(html.contains("<td>&nbsp;</td>"));
/// ```
#[must_use]
pub fn render_html_table(table: &ParsedTable) -> String {
    let mut out = vec!["<table>".to_string(), "  <thead>".to_string()];
    push_row(&mut out, &table.headers, "th");
    out.push("  </thead>".to_string());
    out.push("  <tbody>".to_string());
    for row in &table.rows {
        push_row(&mut out, row, "td");
    }
    out.push("  </tbody>".to_string());
    out.push("</table>".to_string());
    out.join("\n")
}
