//! Schema management commands

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use recipelab_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};

/// Connection settings shared by every command that talks to Postgres
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "RECIPELAB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

#[derive(Parser, Debug)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommands,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Subcommand, Debug)]
pub enum DbCommands {
    /// Create the recipes and logs tables if they don't exist
    Migrate,
    /// Drop and recreate both tables (destroys all data)
    Reset {
        /// Confirm that all recipes and logs should be deleted
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_db(args: DbArgs) -> Result<()> {
    if let DbCommands::Reset { yes: false } = args.command {
        bail!("db reset deletes every recipe and log; pass --yes to confirm");
    }

    let pool = create_pool_with_options(&args.database.database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    match args.command {
        DbCommands::Migrate => {
            migrations::run(&pool)
                .await
                .context("Failed to run schema migrations")?;
            tracing::info!("Schema is up to date");
        }
        DbCommands::Reset { .. } => {
            migrations::reset(&pool)
                .await
                .context("Failed to reset schema")?;
            tracing::info!("Schema reset complete");
        }
    }

    pool.close().await;
    Ok(())
}
