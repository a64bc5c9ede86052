//! recipelab CLI - serve the recipes/logs API and manage its schema
//!
//! - `serve`: run the HTTP API under `/api/v1`
//! - `db migrate`: create missing tables
//! - `db reset`: drop and recreate tables

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "recipelab",
    author,
    version,
    about = "REST API for recipes and cooking logs backed by Postgres"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Manage the database schema (migrate, reset)
    Db(commands::db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Existing environment variables win over .env entries
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Db(args) => commands::db::run_db(args).await,
    }
}
