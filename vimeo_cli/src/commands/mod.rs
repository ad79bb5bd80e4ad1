//! CLI subcommand implementations.

pub mod users;
