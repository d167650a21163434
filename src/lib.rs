//! Convert spreadsheet clipboard text to Markdown tables.
//!
//! Tab-separated text, as produced by copying cells from a spreadsheet, is
//! parsed into a [`Grid`] and written as a Markdown pipe table. Text that
//! already holds a Markdown table is normalised instead, and a parsed table
//! can be rendered as HTML.

#[macro_use]
mod macros;
#[macro_use]
mod test_utils;

pub mod convert;
pub mod error;
pub mod generate;
pub mod html;
pub mod markdown;
pub mod normalize;
pub mod tabular;

/// Rows of cells. Rows are not required to have the same length.
pub type Grid = Vec<Vec<String>>;

pub use convert::{Conversion, SourceFormat, convert, convert_with, markdown_to_html};
pub use error::ConvertError;
pub use generate::{GenerateOptions, LineBreaks, generate_markdown, generate_markdown_with};
pub use html::render_html_table;
pub use markdown::{ParsedTable, is_markdown_table, parse_markdown_table, split_cells};
pub use normalize::{normalize_markdown_table, normalize_markdown_table_with};
pub use tabular::parse_tabular;
