//! Command implementations for the bruh CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod filter;
pub mod focus;
pub mod input;
pub mod matrix;
pub mod validate;

use chrono::NaiveDate;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The smart filter is invalid.
    #[error("invalid filter: {0}")]
    Filter(#[from] bruh_engine_rs::FilterError),

    /// A named filter is not in the config file.
    #[error("no saved filter named '{0}'")]
    UnknownFilter(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("cannot read {path}: {source}")]
    Input {
        /// The file that failed.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// The reference date for filters and classification.
    pub today: NaiveDate,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and loaded config.
    ///
    /// Colors are disabled by `--no-color`, by `color = false` in the config,
    /// or by a non-empty `NO_COLOR` environment variable.
    pub fn from_cli(cli: &Cli, config: &config::Config) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && config.output.color.unwrap_or(true) && !no_color_env,
            quiet: cli.quiet,
            verbose: cli.verbose,
            today: cli.today.unwrap_or_else(bruh_engine_rs::dates::today),
        }
    }
}
