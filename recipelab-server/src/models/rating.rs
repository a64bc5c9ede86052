//! Log rating
//!
//! Ratings are numeric but travel as text. `5` and `"5"` are both accepted
//! and both come back as `"5"`.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::ValidationError;

/// Validated numeric rating, stored and returned as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RatingInput", into = "String")]
pub struct Rating(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RatingInput {
    Number(Number),
    Text(String),
}

impl Rating {
    /// Create a rating from its textual form.
    ///
    /// Surrounding whitespace is dropped; the remainder must parse as a
    /// finite number.
    ///
    /// # Example
    /// ```
    /// use recipelab_server::models::Rating;
    ///
    /// assert_eq!(Rating::new(" 4 ").unwrap().as_str(), "4");
    /// assert!(Rating::new("great").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "rating" });
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(trimmed.to_owned())),
            _ => Err(ValidationError::InvalidFormat {
                field: "rating",
                reason: "must be a finite number",
            }),
        }
    }

    /// Get the rating as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Number> for Rating {
    fn from(n: Number) -> Self {
        // Whole floats (`5.0`) render like integers; JSON numbers are always finite
        let text = match n.as_f64() {
            Some(f)
                if !n.is_i64()
                    && !n.is_u64()
                    && f.fract() == 0.0
                    && f >= i64::MIN as f64
                    && f < i64::MAX as f64 =>
            {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        };
        Self(text)
    }
}

impl TryFrom<RatingInput> for Rating {
    type Error = ValidationError;

    fn try_from(input: RatingInput) -> Result<Self, Self::Error> {
        match input {
            RatingInput::Number(n) => Ok(Self::from(n)),
            RatingInput::Text(text) => Self::new(&text),
        }
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl AsRef<str> for Rating {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
