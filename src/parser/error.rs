//! Parse errors. Every variant is fatal and carries the 1-based source line.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Line shape is none of: count, initial position, movement
    #[error("line {line}: expected 1, 3 or 4 comma-separated fields, found {fields}")]
    Format { line: usize, fields: usize },

    #[error("line {line}: {field} must be an integer, got '{value}'")]
    Numeric {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: movement for unknown robot '{name}'")]
    UnknownRobot { line: usize, name: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Format { line, .. }
            | ParseError::Numeric { line, .. }
            | ParseError::UnknownRobot { line, .. } => *line,
        }
    }
}
