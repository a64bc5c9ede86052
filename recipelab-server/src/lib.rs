//! recipelab-server: HTTP API for recipes and cooking logs
//!
//! Exposes CRUD endpoints under `/api/v1` backed by Postgres.
//! The connection pool is created by the caller and threaded through
//! every repository; nothing here holds a global connection.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, RecipeDeletePolicy};
pub use http::{build_router, run_server, ServerConfig};
