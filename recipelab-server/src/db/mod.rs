//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - One pool per process, passed explicitly - no global connection
//! - One SQL statement per operation
//! - Rely on DB constraints, surface violations - no check-then-insert
//! - Lookups return `Option`, absence is never an empty row

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
