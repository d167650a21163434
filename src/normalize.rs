//! Canonical reformatting of existing Markdown tables.

use crate::{GenerateOptions, generate_markdown_with, parse_markdown_table};

/// Reformat the first Markdown table in `markdown` with default options.
///
/// Returns `None` if `markdown` holds no table.
///
/// # Examples
///
/// ```
/// let out = tablepaste::normalize_markdown_table("|a|b|\n|:---|---:|\n|1|").unwrap();
/// assert_eq!(out, "| a | b |\n| --- | --- |\n| 1 |   |\n");
/// ```
#[must_use]
pub fn normalize_markdown_table(markdown: &str) -> Option<String> {
    normalize_markdown_table_with(markdown, &GenerateOptions::default())
}

/// Reformat the first Markdown table in `markdown`.
///
/// Cell content is kept; spacing, outer pipes and the separator row are
/// rewritten. Text around the table is dropped. Applying this twice gives the
/// same result as applying it once.
#[must_use]
pub fn normalize_markdown_table_with(markdown: &str, opts: &GenerateOptions) -> Option<String> {
    let table = parse_markdown_table(markdown)?;
    Some(generate_markdown_with(&table.into_grid(), opts))
}
