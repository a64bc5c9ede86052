//! Schema setup for the recipes and logs tables

use sqlx::PgPool;

const CREATE_RECIPES: &str = r#"
    CREATE TABLE IF NOT EXISTS recipes (
        id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        name TEXT NOT NULL,
        directions TEXT[] NOT NULL DEFAULT '{}'
    )
"#;

// No ON DELETE action: cascading is chosen per request by RecipeDeletePolicy.
const CREATE_LOGS: &str = r#"
    CREATE TABLE IF NOT EXISTS logs (
        id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        recipe_id BIGINT NOT NULL REFERENCES recipes(id),
        date_of_event DATE NOT NULL,
        notes TEXT NOT NULL DEFAULT '',
        rating TEXT NOT NULL
    )
"#;

const CREATE_LOGS_RECIPE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS logs_recipe_id_idx ON logs (recipe_id)";

/// Create tables that don't exist yet. Safe to run on every startup.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    sqlx::query(CREATE_RECIPES).execute(pool).await?;
    sqlx::query(CREATE_LOGS).execute(pool).await?;
    sqlx::query(CREATE_LOGS_RECIPE_INDEX).execute(pool).await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}

/// Drop both tables and recreate them empty.
///
/// Identity counters restart at 1.
pub async fn reset(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::warn!("Dropping recipes and logs tables");

    sqlx::query("DROP TABLE IF EXISTS logs").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS recipes").execute(pool).await?;

    run(pool).await
}
