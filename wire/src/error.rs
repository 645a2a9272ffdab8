//! Error types for field codec operations.

use std::fmt;

/// Result type for field codec operations.
pub type WireResult<T> = Result<T, WireError>;

/// Decode errors for the delimited-token field codec.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    /// Ran out of tokens while more fields were expected.
    UnexpectedEnd { expected: &'static str },

    /// A token could not be parsed as an integer in the requested radix.
    InvalidInt { token: String, radix: u32 },

    /// A token was neither `true` nor `false`.
    InvalidBool { token: String },

    /// An array field's declared element count did not match the tokens
    /// actually present.
    ArrayCount { declared: usize, actual: usize },

    /// A counted array did not start with the open-bracket token.
    MissingArrayOpen { token: String },

    /// A range-list closing value did not follow a smaller opening value.
    InvalidRangePair { open: i32, close: i32 },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of payload, expected {expected}")
            }
            Self::InvalidInt { token, radix } => {
                write!(f, "invalid base-{radix} integer token: {token:?}")
            }
            Self::InvalidBool { token } => {
                write!(f, "invalid boolean token: {token:?}")
            }
            Self::ArrayCount { declared, actual } => {
                write!(f, "array declared {declared} elements but {actual} followed")
            }
            Self::MissingArrayOpen { token } => {
                write!(f, "expected counted array, found token {token:?}")
            }
            Self::InvalidRangePair { open, close } => {
                write!(f, "range close {close} does not match open {open}")
            }
        }
    }
}

impl std::error::Error for WireError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_array_count() {
        let err = WireError::ArrayCount {
            declared: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn display_invalid_int() {
        let err = WireError::InvalidInt {
            token: "abc".into(),
            radix: 10,
        };
        assert!(err.to_string().contains("abc"));
    }
}
