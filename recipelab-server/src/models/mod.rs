//! Boundary value types
//!
//! Request payloads are converted into these types before any SQL runs.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod id;
pub mod rating;

pub use validation::ValidationError;
pub use id::RecordId;
pub use rating::Rating;
