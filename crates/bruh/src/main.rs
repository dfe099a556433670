use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands, FocusCommands};
use commands::config::load_config;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` enables debug output
/// and everything else logs warnings only.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    // Completions must work even with a broken config file.
    if let Commands::Completions { shell } = &cli.command {
        return Ok(commands::completions::execute(shell)?);
    }

    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, &config);

    match &cli.command {
        Commands::Filter {
            tasks,
            source,
            limit,
        } => {
            let opts = commands::filter::FilterOptions {
                tasks,
                source,
                limit: *limit,
            };
            commands::filter::execute(&ctx, &config, &opts)
        }
        Commands::Validate { source } => commands::validate::execute(&ctx, &config, source),
        Commands::Matrix { tasks, window, all } => {
            let opts = commands::matrix::MatrixOptions {
                tasks,
                window: *window,
                all: *all,
            };
            commands::matrix::execute(&ctx, &config, &opts)
        }
        Commands::Focus {
            command: FocusCommands::Plan { focus, sessions },
        } => commands::focus::execute_plan(&ctx, &config, *focus, *sessions),
        Commands::Config { command } => match command {
            None | Some(ConfigCommands::Show) => commands::config::execute_show(&ctx, &config),
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
        },
        Commands::Completions { .. } => Ok(()),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::UnknownFilter(_) => "UNKNOWN_FILTER",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Input { .. } => "INPUT_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Filter(_) | CommandError::UnknownFilter(_) => ExitCode::from(2),
        CommandError::Config(_)
        | CommandError::Input { .. }
        | CommandError::Io(_)
        | CommandError::Json(_) => ExitCode::from(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bruh_engine_rs::FilterError;

    #[test]
    fn test_error_codes() {
        let filter = CommandError::Filter(FilterError::invalid_operator("status", "gt"));
        assert_eq!(error_code(&filter), "FILTER_ERROR");
        assert_eq!(error_exit_code(&filter), ExitCode::from(2));

        let unknown = CommandError::UnknownFilter("today".to_string());
        assert_eq!(error_code(&unknown), "UNKNOWN_FILTER");
        assert_eq!(error_exit_code(&unknown), ExitCode::from(2));

        let config = CommandError::Config("bad".to_string());
        assert_eq!(error_code(&config), "CONFIG_ERROR");
        assert_eq!(error_exit_code(&config), ExitCode::from(1));
    }

    #[test]
    fn test_input_error_code() {
        let err = CommandError::Input {
            path: "tasks.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error_code(&err), "INPUT_ERROR");
        assert_eq!(error_exit_code(&err), ExitCode::from(1));
        assert_eq!(err.to_string(), "cannot read tasks.json: missing");
    }
}
