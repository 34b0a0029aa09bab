//! Summary parser error types.

use thiserror::Error;

use super::fields::Field;

/// Malformed summary input
///
/// Every variant names the line it was raised for and keeps the offending
/// text for diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Title has fewer than three comma-separated parts
    #[error("Invalid tournament title: {0:?}")]
    InvalidTitle(String),

    /// No `#<id>` in the first title part
    #[error("Missing tournament id in title: {0:?}")]
    MissingId(String),

    /// Tournament id contains something other than digits
    #[error("Tournament id is not numeric: {id:?}")]
    InvalidId { id: String, line: String },

    /// No amount or labelled amount found
    #[error("No {field} amount found in line: {line:?}")]
    NoAmount { field: Field, line: String },

    /// Amount literal could not be parsed as a number
    #[error("Invalid {field} amount {literal:?} in line: {line:?}")]
    InvalidAmount {
        field: Field,
        literal: String,
        line: String,
    },

    /// Line does not follow the fixed layout of its role
    #[error("Malformed {field} line: {line:?}")]
    Malformed { field: Field, line: String },

    /// Result line without the mandatory prize phrase
    #[error("No prize found in result line: {0:?}")]
    NoPrize(String),

    /// Input ended before the result line
    #[error("Summary truncated after {lines} line(s), missing {missing} line")]
    Truncated { lines: usize, missing: Field },
}

impl ParseError {
    /// Line role responsible for the failure
    pub fn field(&self) -> Field {
        match self {
            ParseError::InvalidTitle(_)
            | ParseError::MissingId(_)
            | ParseError::InvalidId { .. } => Field::Title,
            ParseError::NoAmount { field, .. }
            | ParseError::InvalidAmount { field, .. }
            | ParseError::Malformed { field, .. } => *field,
            ParseError::NoPrize(_) => Field::Result,
            ParseError::Truncated { missing, .. } => *missing,
        }
    }

    /// Offending input text, empty for truncated input
    pub fn line(&self) -> &str {
        match self {
            ParseError::InvalidTitle(line)
            | ParseError::MissingId(line)
            | ParseError::NoPrize(line)
            | ParseError::InvalidId { line, .. }
            | ParseError::NoAmount { line, .. }
            | ParseError::InvalidAmount { line, .. }
            | ParseError::Malformed { line, .. } => line,
            ParseError::Truncated { .. } => "",
        }
    }
}

/// Result type for extractors
pub type ParseResult<T> = Result<T, ParseError>;
