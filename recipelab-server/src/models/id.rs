//! Record identifiers
//!
//! Storage uses `BIGINT` identity columns, but the API always speaks
//! strings: `{"id": "1"}`. Input accepts either `"1"` or `1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A positive storage identifier, rendered as a JSON string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "IdInput", into = "String")]
pub struct RecordId(i64);

/// Wire forms accepted for an identifier.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdInput {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Create an identifier, rejecting zero and negative values.
    ///
    /// # Example
    /// ```
    /// use recipelab_server::models::RecordId;
    ///
    /// assert!(RecordId::new(1).is_ok());
    /// assert!(RecordId::new(0).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::OutOfRange {
                field: "id",
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Raw value for binding into SQL.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        let value: i64 = trimmed.parse().map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "must be a positive integer",
        })?;

        Self::new(value)
    }
}

impl TryFrom<IdInput> for RecordId {
    type Error = ValidationError;

    fn try_from(input: IdInput) -> Result<Self, Self::Error> {
        match input {
            IdInput::Int(value) => Self::new(value),
            IdInput::Text(text) => text.parse(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_path_segments() {
        assert_eq!("42".parse::<RecordId>().unwrap().get(), 42);
        assert_eq!(" 7 ".parse::<RecordId>().unwrap().get(), 7);
    }

    #[test]
    fn rejects_non_numeric() {
        let err = "abc".parse::<RecordId>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_empty() {
        let err = "".parse::<RecordId>().unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_non_positive() {
        assert!(matches!(
            RecordId::new(0).unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
        assert!("-5".parse::<RecordId>().is_err());
    }

    #[test]
    fn accepts_string_or_number_in_json() {
        let from_text: RecordId = serde_json::from_value(json!("3")).unwrap();
        let from_int: RecordId = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(from_text, from_int);
    }

    #[test]
    fn rejects_fractional_json() {
        assert!(serde_json::from_value::<RecordId>(json!(1.5)).is_err());
    }

    #[test]
    fn serializes_as_string() {
        let id = RecordId::new(12).unwrap();
        assert_eq!(serde_json::to_value(id).unwrap(), json!("12"));
    }
}
