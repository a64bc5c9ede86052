//! Repository implementations for database access
//!
//! Each repository borrows the pool for the duration of one call and
//! issues exactly one statement per operation.

pub mod recipes;
pub mod logs;

pub use recipes::{Recipe, RecipeDeletePolicy, RecipeRepo};
pub use logs::{Log, LogFields, LogRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("foreign key violation: {constraint}")]
    ForeignKey { constraint: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKey {
                    constraint: db_err.constraint().unwrap_or("unknown").to_owned(),
                };
            }
        }
        Self::Sqlx(e)
    }
}
