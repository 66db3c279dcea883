//! Codec error types
//!
//! Decode is the one place where schema drift between stored documents and
//! the current record shape is expected. A failure always names the first
//! field that could not be coerced; decode never silently defaults.

use std::fmt;

use thiserror::Error;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// A stored document could not be coerced into the target record shape.
///
/// Recoverable by the caller (skip, log, migrate); never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}': {reason}")]
pub struct DecodeError {
    /// First field that failed
    pub field: String,
    /// Why it failed
    pub reason: DecodeReason,
}

/// Why a field could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeReason {
    /// Required field not present in the document
    Missing,
    /// Field present but holds a value of the wrong kind
    WrongKind {
        expected: &'static str,
        actual: &'static str,
    },
    /// Field has the right kind but a value outside the record's domain
    OutOfDomain(String),
}

impl fmt::Display for DecodeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing required field"),
            Self::WrongKind { expected, actual } => {
                write!(f, "expected {}, found {}", expected, actual)
            }
            Self::OutOfDomain(msg) => write!(f, "out of domain: {}", msg),
        }
    }
}

impl DecodeError {
    /// Required field absent
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: DecodeReason::Missing,
        }
    }

    /// Field holds a value of the wrong kind
    pub fn wrong_kind(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self {
            field: field.into(),
            reason: DecodeReason::WrongKind { expected, actual },
        }
    }

    /// Field value is outside the record's domain
    pub fn out_of_domain(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: DecodeReason::OutOfDomain(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let err = DecodeError::missing("age");
        assert_eq!(err.to_string(), "field 'age': missing required field");

        let err = DecodeError::wrong_kind("age", "int", "string");
        assert_eq!(err.to_string(), "field 'age': expected int, found string");

        let err = DecodeError::out_of_domain("age", "negative");
        assert_eq!(err.to_string(), "field 'age': out of domain: negative");
    }

    #[test]
    fn test_errors_compare_by_field_and_reason() {
        assert_eq!(DecodeError::missing("a"), DecodeError::missing("a"));
        assert_ne!(DecodeError::missing("a"), DecodeError::missing("b"));
        assert_ne!(
            DecodeError::missing("a"),
            DecodeError::wrong_kind("a", "int", "null")
        );
    }
}
