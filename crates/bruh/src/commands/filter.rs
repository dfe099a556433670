//! Filter command implementation.
//!
//! Applies a smart filter to a task file and prints the matching tasks.

use std::path::Path;

use bruh_engine_rs::filter::FilterEngine;
use tracing::debug;

use super::config::Config;
use super::input::{load_tasks, resolve_filter};
use super::{CommandContext, Result};
use crate::cli::FilterSource;
use crate::output::{format_tasks_json, format_tasks_table};

/// Options for the filter command.
#[derive(Debug)]
pub struct FilterOptions<'a> {
    /// Tasks JSON file.
    pub tasks: &'a Path,
    /// Where the smart filter comes from.
    pub source: &'a FilterSource,
    /// Maximum number of tasks to print.
    pub limit: Option<usize>,
}

/// Executes the filter command.
///
/// # Errors
///
/// Returns an error if either file cannot be read or the filter is invalid.
pub fn execute(ctx: &CommandContext, config: &Config, opts: &FilterOptions<'_>) -> Result<()> {
    let (label, filter) = resolve_filter(opts.source, config)?;
    let engine = FilterEngine::compile(&filter)?.with_resolver(config.date_resolver());
    let tasks = load_tasks(opts.tasks)?;

    let mut matched = engine.evaluate(&tasks, ctx.today);
    let total = matched.len();
    if let Some(limit) = opts.limit {
        matched.truncate(limit);
    }
    debug!(filter = %label, total, shown = matched.len(), "filter applied");

    if ctx.verbose && !ctx.json_output {
        let sort = engine.sort_order();
        eprintln!(
            "{label}: {} condition(s) joined by {}, sorted by {} {}",
            filter.conditions.len(),
            filter.logic.as_str(),
            sort.field,
            sort.direction.as_str()
        );
    }

    if ctx.json_output {
        println!("{}", format_tasks_json(&label, ctx.today, total, &matched)?);
    } else {
        print!("{}", format_tasks_table(&matched, ctx.today, ctx.use_colors));
        if !ctx.quiet && total > matched.len() {
            println!("\n{} of {} tasks shown", matched.len(), total);
        }
    }

    Ok(())
}
