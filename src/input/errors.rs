//! Input parse errors
//!
//! [`InputParseError`] covers everything that can go wrong turning typed text
//! into algorithm input. Errors are returned as values and shown to the user;
//! a failed parse never touches the input or trace that is already committed.

use super::lexer::Location;
use thiserror::Error;

/// Errors raised by the input parsers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputParseError {
    /// Nothing to parse
    #[error("Input is empty")]
    Empty,

    /// A value that is not an integer
    #[error("Expected a number at {location}, found '{token}'")]
    NonNumeric { token: String, location: Location },

    /// More elements than the algorithm accepts
    #[error("Too many values: {len} given, at most {max} allowed")]
    TooLong { len: usize, max: usize },

    /// Matrix rows of different lengths
    #[error("Row {row} has {got} value(s), expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Matrix that must be square but is not
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Matrix exceeding the size bound
    #[error("Matrix is {rows}x{cols}, at most {max_rows}x{max_cols} allowed")]
    TooLarge {
        rows: usize,
        cols: usize,
        max_rows: usize,
        max_cols: usize,
    },

    /// Token that has no meaning in a level-order tree
    #[error("Unexpected '{token}' at {location}")]
    InvalidToken { token: String, location: Location },

    /// Value outside the accepted range
    #[error("Value {value} is out of range {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Structurally invalid input (unbalanced brackets, bad edge arity, ...)
    #[error("Malformed input at {location}: {message}")]
    Malformed { message: String, location: Location },
}

impl InputParseError {
    pub fn location(&self) -> Option<&Location> {
        match self {
            InputParseError::NonNumeric { location, .. } => Some(location),
            InputParseError::InvalidToken { location, .. } => Some(location),
            InputParseError::Malformed { location, .. } => Some(location),
            InputParseError::Empty
            | InputParseError::TooLong { .. }
            | InputParseError::Ragged { .. }
            | InputParseError::NotSquare { .. }
            | InputParseError::TooLarge { .. }
            | InputParseError::OutOfRange { .. } => None,
        }
    }

    pub(crate) fn malformed(message: impl Into<String>, location: Location) -> Self {
        InputParseError::Malformed {
            message: message.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        let err = InputParseError::NonNumeric {
            token: "abc".to_string(),
            location: Location::new(1, 4),
        };
        assert_eq!(err.to_string(), "Expected a number at column 4, found 'abc'");

        let err = InputParseError::TooLong { len: 30, max: 20 };
        assert_eq!(err.to_string(), "Too many values: 30 given, at most 20 allowed");
        assert!(err.location().is_none());
    }
}
