//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the bruh CLI.

use std::path::PathBuf;

use bruh_engine_rs::focus::MAX_SESSIONS_BEFORE_LONG_BREAK;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// bruh - Prioritize tasks with smart filters and the Eisenhower matrix
#[derive(Parser, Debug)]
#[command(name = "bruh")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true, env = "BRUH_TODAY")]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a smart filter comes from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct FilterSource {
    /// Smart filter JSON file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Saved filter name from the config file
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a smart filter to a task file
    #[command(alias = "f")]
    Filter {
        /// Tasks JSON file (array of tasks)
        tasks: PathBuf,

        #[command(flatten)]
        source: FilterSource,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Check a smart filter for configuration errors
    Validate {
        #[command(flatten)]
        source: FilterSource,
    },

    /// Group tasks into Eisenhower quadrants
    #[command(alias = "m")]
    Matrix {
        /// Tasks JSON file (array of tasks)
        tasks: PathBuf,

        /// Days ahead that still count as urgent (default: from config, else 3)
        #[arg(short, long)]
        window: Option<u32>,

        /// Include completed and cancelled tasks
        #[arg(long)]
        all: bool,
    },

    /// Focus session planning
    Focus {
        #[command(subcommand)]
        command: FocusCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Focus subcommands
#[derive(Subcommand, Debug)]
pub enum FocusCommands {
    /// Show the phases of one focus cycle
    Plan {
        /// Override focus session length in minutes
        #[arg(long)]
        focus: Option<u32>,

        /// Override number of sessions before the long break
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SESSIONS_BEFORE_LONG_BREAK as i64))]
        sessions: Option<u32>,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration (default)
    Show,

    /// Show config file path
    Path,
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
