//! Error type shared by the conversion functions.

use thiserror::Error;

/// Reasons a conversion can fail.
///
/// The messages are user facing; the command-line tool prints them verbatim.
/// A Markdown table that simply is not present is reported as `None` by
/// [`parse_markdown_table`](crate::parse_markdown_table) rather than as an
/// error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input was empty or contained only whitespace.
    #[error("No data provided")]
    EmptyInput,

    /// Tab-separated parsing produced no row with any content.
    #[error("No valid table data found")]
    NoValidData,

    /// Input was detected as a Markdown table but could not be normalised.
    #[error("Invalid Markdown table format")]
    InvalidMarkdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ConvertError::EmptyInput.to_string(), "No data provided");
        assert_eq!(
            ConvertError::NoValidData.to_string(),
            "No valid table data found"
        );
        assert_eq!(
            ConvertError::InvalidMarkdown.to_string(),
            "Invalid Markdown table format"
        );
    }
}
