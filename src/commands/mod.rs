//! CLI subcommand implementations.

pub mod query;
