//! Validation error types

use std::fmt;

/// Validation error for boundary types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value doesn't have the required shape (e.g., not a number)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Value parsed but falls outside the accepted range
    OutOfRange { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange { field, value } => {
                write!(f, "{} value out of range: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "rating",
            reason: "must be numeric",
        };
        assert_eq!(err.to_string(), "rating: must be numeric");

        let err = ValidationError::OutOfRange {
            field: "id",
            value: "-3".into(),
        };
        assert_eq!(err.to_string(), "id value out of range: '-3'");
    }
}
