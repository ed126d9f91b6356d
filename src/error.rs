//! Error types for input validation

use std::fmt;
use std::io;

/// Errors raised while describing a Boolean function
///
/// These errors occur before the minimization engine is constructed; the
/// engine itself cannot fail once its input has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// The literal count must be between 1 and 26 (variables are lettered a-z)
    InvalidLiteralCount {
        /// The literal count that was requested
        given: usize,
    },
    /// A term index does not fit in the declared bit width
    TermOutOfRange {
        /// The term index that was rejected
        value: u32,
        /// The declared literal count
        literal_count: usize,
    },
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionError::InvalidLiteralCount { given } => write!(
                f,
                "Invalid literal count {}. Expected a value between 1 and 26.",
                given
            ),
            FunctionError::TermOutOfRange {
                value,
                literal_count,
            } => write!(
                f,
                "Term {} does not fit in {} literals (valid range: 0..={}).",
                value,
                literal_count,
                (1u32 << literal_count) - 1
            ),
        }
    }
}

impl std::error::Error for FunctionError {}

impl From<FunctionError> for io::Error {
    fn from(err: FunctionError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_literal_count_message() {
        let err = FunctionError::InvalidLiteralCount { given: 0 };
        let msg = err.to_string();
        assert!(msg.contains("Invalid literal count 0"));
    }

    #[test]
    fn test_term_out_of_range_message() {
        let err = FunctionError::TermOutOfRange {
            value: 16,
            literal_count: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("Term 16"));
        assert!(msg.contains("0..=15"));
    }

    #[test]
    fn test_function_error_to_io_error() {
        let err = FunctionError::InvalidLiteralCount { given: 27 };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
