//! Indentation tracking for CCSS source lines.
//!
//! The first indented line of a file fixes the indentation unit; every
//! later line must indent by an exact multiple of it, and may open at most
//! one level deeper than the line before it.

use crate::error::ParserError;

/// Converts leading whitespace into integer nesting levels.
#[derive(Debug, Default)]
pub struct IndentTracker {
    unit: usize,
    level: usize,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the nesting level of `line` and records it as the current
    /// level.
    ///
    /// Fails with [`ParserError::Indentation`] when the leading whitespace
    /// is not a multiple of the established unit, or when the level jumps
    /// more than one past the previous line's.
    pub fn advance(&mut self, line: &str, lineno: usize) -> Result<usize, ParserError> {
        let width = line.chars().take_while(|c| c.is_whitespace()).count();

        if self.unit == 0 && width > 0 {
            self.unit = width;
        }
        if self.unit > 0 && width % self.unit != 0 {
            return Err(ParserError::Indentation { line: lineno });
        }

        let level = if self.unit > 0 { width / self.unit } else { 0 };
        if level > self.level + 1 {
            return Err(ParserError::Indentation { line: lineno });
        }
        self.level = level;
        Ok(level)
    }
}
