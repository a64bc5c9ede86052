//! Recipe repository
//!
//! Plain CRUD over the `recipes` table. `directions` is a `TEXT[]` column
//! and round-trips as an ordered `Vec<String>`.

use sqlx::{FromRow, PgPool};

use crate::models::RecordId;
use super::DbError;

/// Recipe record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub directions: Vec<String>,
}

/// What happens to a recipe's logs when the recipe is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecipeDeletePolicy {
    /// Leave the foreign key in charge; deleting a recipe with logs fails.
    #[default]
    Restrict,
    /// Delete the recipe's logs together with the recipe.
    Cascade,
}

/// Recipe repository
pub struct RecipeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RecipeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a recipe, returning it with its generated id.
    pub async fn insert(&self, name: &str, directions: &[String]) -> Result<Recipe, DbError> {
        let recipe: Recipe = sqlx::query_as(
            r#"
            INSERT INTO recipes (name, directions)
            VALUES ($1, $2)
            RETURNING id, name, directions
            "#,
        )
        .bind(name)
        .bind(directions)
        .fetch_one(self.pool)
        .await?;

        Ok(recipe)
    }

    /// All recipes in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Recipe>, DbError> {
        let recipes: Vec<Recipe> = sqlx::query_as(
            r#"
            SELECT id, name, directions
            FROM recipes
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(recipes)
    }

    /// Get a single recipe. Returns None if not found.
    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<Recipe>, DbError> {
        let recipe: Option<Recipe> = sqlx::query_as(
            r#"
            SELECT id, name, directions
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool)
        .await?;

        Ok(recipe)
    }

    /// Replace name and directions. Returns None if the recipe doesn't exist.
    pub async fn update(
        &self,
        id: RecordId,
        name: &str,
        directions: &[String],
    ) -> Result<Option<Recipe>, DbError> {
        let recipe: Option<Recipe> = sqlx::query_as(
            r#"
            UPDATE recipes
            SET name = $2,
                directions = $3
            WHERE id = $1
            RETURNING id, name, directions
            "#,
        )
        .bind(id.get())
        .bind(name)
        .bind(directions)
        .fetch_optional(self.pool)
        .await?;

        Ok(recipe)
    }

    /// Delete a recipe, returning what was removed.
    ///
    /// Under `Restrict` a recipe that still has logs yields
    /// `DbError::ForeignKey`. Under `Cascade` its logs are removed in the
    /// same statement.
    pub async fn delete(
        &self,
        id: RecordId,
        policy: RecipeDeletePolicy,
    ) -> Result<Option<Recipe>, DbError> {
        let sql = match policy {
            RecipeDeletePolicy::Restrict => {
                r#"
                DELETE FROM recipes
                WHERE id = $1
                RETURNING id, name, directions
                "#
            }
            RecipeDeletePolicy::Cascade => {
                r#"
                WITH removed_logs AS (
                    DELETE FROM logs WHERE recipe_id = $1
                )
                DELETE FROM recipes
                WHERE id = $1
                RETURNING id, name, directions
                "#
            }
        };

        let recipe: Option<Recipe> = sqlx::query_as(sql)
            .bind(id.get())
            .fetch_optional(self.pool)
            .await?;

        if let Some(recipe) = &recipe {
            tracing::debug!(id = recipe.id, ?policy, "recipe deleted");
        }

        Ok(recipe)
    }
}
