//! Subcommand implementations

pub mod db;
pub mod serve;
