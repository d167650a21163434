//! Format detection and the top-level conversion entry points.

use tracing::debug;

use crate::{
    ConvertError,
    GenerateOptions,
    generate_markdown_with,
    is_markdown_table,
    normalize_markdown_table_with,
    parse_markdown_table,
    parse_tabular,
    render_html_table,
};

/// Which parser recognised the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Tab-separated spreadsheet text.
    Tabular,
    /// An existing Markdown pipe table.
    Markdown,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub markdown: String,
    pub source: SourceFormat,
}

/// Convert pasted text to a Markdown table using default options.
///
/// # Errors
/// See [`convert_with`].
pub fn convert(raw: &str) -> Result<Conversion, ConvertError> {
    convert_with(raw, &GenerateOptions::default())
}

/// Convert pasted text to a Markdown table.
///
/// Text that already contains a Markdown table is normalised; anything else
/// is parsed as tab-separated text.
///
/// # Errors
/// Returns [`ConvertError::EmptyInput`] for blank input and
/// [`ConvertError::NoValidData`] when the text is neither a Markdown table
/// nor tab-separated data.
///
/// # Examples
///
/// ```
/// use tablepaste::{SourceFormat, convert};
///
/// let out = convert("a\tb\nc\td").unwrap();
/// assert_eq!(out.source, SourceFormat::Tabular);
/// assert_eq!(out.markdown, "| a | b |\n| --- | --- |\n| c | d |\n");
/// ```
pub fn convert_with(raw: &str, opts: &GenerateOptions) -> Result<Conversion, ConvertError> {
    if raw.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    if is_markdown_table(raw) {
        let markdown =
            normalize_markdown_table_with(raw, opts).ok_or(ConvertError::InvalidMarkdown)?;
        debug!(source = "markdown", "normalised table");
        return Ok(Conversion {
            markdown,
            source: SourceFormat::Markdown,
        });
    }

    let grid = parse_tabular(raw)?;
    let markdown = generate_markdown_with(&grid, opts);
    debug!(source = "tabular", rows = grid.len(), "converted table");
    Ok(Conversion {
        markdown,
        source: SourceFormat::Tabular,
    })
}

/// Render the first Markdown table in `markdown` as HTML.
///
/// Returns `None` if there is no table.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> Option<String> {
    parse_markdown_table(markdown).map(|table| render_html_table(&table))
}
