//! Tierlist CLI library.
//!
//! This library provides the application shell around the ranking engine:
//! argument parsing, configuration, logging setup, command execution and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

/// The engine as the CLI runs it: backed by the SQLite store.
pub type Engine = tierlist_engine::RankingEngine<tierlist_store::SqliteStore>;
