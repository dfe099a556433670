//! Matrix command implementation.
//!
//! Groups tasks into Eisenhower quadrants.

use std::path::Path;

use bruh_engine_rs::matrix::{ClassifierOptions, TaskClassifier};
use bruh_model_rs::models::Task;
use tracing::debug;

use super::config::Config;
use super::input::load_tasks;
use super::{CommandContext, Result};
use crate::output::{format_board_json, format_board_table};

/// Options for the matrix command.
#[derive(Debug)]
pub struct MatrixOptions<'a> {
    /// Tasks JSON file.
    pub tasks: &'a Path,
    /// Urgency window override.
    pub window: Option<u32>,
    /// Include completed and cancelled tasks.
    pub all: bool,
}

/// Executes the matrix command.
pub fn execute(ctx: &CommandContext, config: &Config, opts: &MatrixOptions<'_>) -> Result<()> {
    let options = ClassifierOptions {
        urgent_window_days: opts.window.unwrap_or(config.matrix.urgent_window_days),
    };
    let classifier = TaskClassifier::new(options);

    let tasks = load_tasks(opts.tasks)?;
    let open = select_tasks(&tasks, opts.all);
    debug!(
        loaded = tasks.len(),
        classified = open.len(),
        window = options.urgent_window_days,
        "building matrix"
    );

    let board = classifier.classify_all(&open, ctx.today);

    if ctx.json_output {
        println!(
            "{}",
            format_board_json(&board, ctx.today, options.urgent_window_days)?
        );
    } else {
        print!("{}", format_board_table(&board, ctx.today, ctx.use_colors));
    }

    Ok(())
}

/// Drops closed tasks unless `all` is set.
fn select_tasks(tasks: &[Task], all: bool) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| all || !task.status.is_closed())
        .cloned()
        .collect()
}
