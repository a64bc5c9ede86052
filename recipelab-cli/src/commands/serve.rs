//! HTTP server command for the recipelab API
//!
//! Creates the pool, makes sure the schema exists, then serves until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use recipelab_server::db::{create_pool_with_options, migrations, RecipeDeletePolicy};
use recipelab_server::{run_server, ServerConfig};

use super::db::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "RECIPELAB_BIND", default_value = "127.0.0.1:7890")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Delete a recipe's logs along with the recipe instead of refusing
    #[arg(long, env = "RECIPELAB_CASCADE_DELETES")]
    pub cascade_deletes: bool,

    /// Skip creating missing tables at startup
    #[arg(long)]
    pub skip_migrations: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            recipe_delete: if self.cascade_deletes {
                RecipeDeletePolicy::Cascade
            } else {
                RecipeDeletePolicy::Restrict
            },
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    tracing::info!("Starting recipelab server on {}", config.bind_addr);

    let pool = create_pool_with_options(&args.database.database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.skip_migrations {
        tracing::info!("Skipping schema migrations");
    } else {
        migrations::run(&pool)
            .await
            .context("Failed to run schema migrations")?;
    }

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
