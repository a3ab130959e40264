//! Error types for CCSS conversion.
//!
//! A conversion fails on the first offending line and never resumes; the
//! caller (typically the batch driver) decides whether to continue with
//! the next input.

use thiserror::Error;

/// Errors that can occur while converting a CCSS source to CSS.
///
/// Every variant carries the 1-based number of the source line it was
/// raised on.
///
/// # Examples
///
/// ```rust
/// use ccss::ParserError;
///
/// // A property definition before any selector scope is open.
/// let result = ccss::convert("color: red\n");
/// assert_eq!(result, Err(ParserError::MissingSelector { line: 1 }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// A line's leading whitespace is not an exact multiple of the
    /// indentation unit, or the line indents more than one level past the
    /// previous line.
    #[error("Indentation error (line {line})")]
    Indentation { line: usize },

    /// A property definition appeared while no selector scope was open.
    #[error("Selector expected, found definition (line {line})")]
    MissingSelector { line: usize },

    /// The line matches none of the statement shapes: selector header,
    /// property-prefix header, or property definition.
    #[error("Unexpected item (line {line})")]
    UnexpectedStatement { line: usize },
}

impl ParserError {
    /// The 1-based source line the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            Self::Indentation { line }
            | Self::MissingSelector { line }
            | Self::UnexpectedStatement { line } => *line,
        }
    }
}
