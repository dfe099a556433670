//! Validate command implementation.
//!
//! Compiles a smart filter without evaluating it, reporting the first
//! configuration error.

use bruh_engine_rs::filter::FilterEngine;
use owo_colors::OwoColorize;

use super::config::Config;
use super::input::resolve_filter;
use super::{CommandContext, Result};
use crate::cli::FilterSource;

/// Executes the validate command.
///
/// # Errors
///
/// Returns [`CommandError::Filter`](super::CommandError::Filter) if the filter
/// references an unknown field, an inapplicable operator, or a malformed value.
pub fn execute(ctx: &CommandContext, config: &Config, source: &FilterSource) -> Result<()> {
    let (label, filter) = resolve_filter(source, config)?;
    let engine = FilterEngine::compile(&filter)?;
    let sort = engine.sort_order();

    if ctx.json_output {
        let output = serde_json::json!({
            "filter": label,
            "valid": true,
            "conditions": filter.conditions.len(),
            "logic": filter.logic,
            "sort": {
                "field": sort.field.as_str(),
                "direction": sort.direction,
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        let status = if ctx.use_colors {
            "ok".green().to_string()
        } else {
            "ok".to_string()
        };
        println!(
            "{status}: {label} ({} condition(s), logic {}, sorted by {} {})",
            filter.conditions.len(),
            filter.logic.as_str(),
            sort.field.as_str(),
            sort.direction.as_str(),
        );
    }

    Ok(())
}
