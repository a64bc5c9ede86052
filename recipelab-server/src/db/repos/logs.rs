//! Log repository
//!
//! Each log references a recipe through `recipe_id`. A missing recipe is
//! reported by the foreign key as `DbError::ForeignKey`.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::models::{Rating, RecordId};
use super::DbError;

/// Log record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Log {
    pub id: i64,
    pub recipe_id: i64,
    pub date_of_event: NaiveDate,
    pub notes: String,
    pub rating: String,
}

/// Every mutable column of a log; used for both insert and full replace.
#[derive(Debug, Clone)]
pub struct LogFields {
    pub recipe_id: RecordId,
    pub date_of_event: NaiveDate,
    pub notes: String,
    pub rating: Rating,
}

/// Log repository
pub struct LogRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LogRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a log, returning it with its generated id.
    pub async fn insert(&self, fields: &LogFields) -> Result<Log, DbError> {
        let log: Log = sqlx::query_as(
            r#"
            INSERT INTO logs (recipe_id, date_of_event, notes, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id, recipe_id, date_of_event, notes, rating
            "#,
        )
        .bind(fields.recipe_id.get())
        .bind(fields.date_of_event)
        .bind(&fields.notes)
        .bind(fields.rating.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(log)
    }

    /// All logs in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Log>, DbError> {
        let logs: Vec<Log> = sqlx::query_as(
            r#"
            SELECT id, recipe_id, date_of_event, notes, rating
            FROM logs
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(logs)
    }

    /// Get a single log. Returns None if not found.
    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<Log>, DbError> {
        let log: Option<Log> = sqlx::query_as(
            r#"
            SELECT id, recipe_id, date_of_event, notes, rating
            FROM logs
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool)
        .await?;

        Ok(log)
    }

    /// Replace every field except the id. Returns None if the log doesn't exist.
    pub async fn update(&self, id: RecordId, fields: &LogFields) -> Result<Option<Log>, DbError> {
        let log: Option<Log> = sqlx::query_as(
            r#"
            UPDATE logs
            SET recipe_id = $2,
                date_of_event = $3,
                notes = $4,
                rating = $5
            WHERE id = $1
            RETURNING id, recipe_id, date_of_event, notes, rating
            "#,
        )
        .bind(id.get())
        .bind(fields.recipe_id.get())
        .bind(fields.date_of_event)
        .bind(&fields.notes)
        .bind(fields.rating.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(log)
    }

    /// Delete a log, returning what was removed.
    pub async fn delete(&self, id: RecordId) -> Result<Option<Log>, DbError> {
        let log: Option<Log> = sqlx::query_as(
            r#"
            DELETE FROM logs
            WHERE id = $1
            RETURNING id, recipe_id, date_of_event, notes, rating
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool)
        .await?;

        Ok(log)
    }
}
