//! Task list output formatting.

use bruh_model_rs::models::Task;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_due, format_minutes, format_priority, format_status, truncate_str};

/// JSON output structure for the filter command.
#[derive(Serialize)]
pub struct FilterOutput<'a> {
    pub filter: &'a str,
    pub today: NaiveDate,
    pub total: usize,
    pub tasks: &'a [&'a Task],
}

/// Formats filter results as JSON.
pub fn format_tasks_json(
    filter: &str,
    today: NaiveDate,
    total: usize,
    tasks: &[&Task],
) -> Result<String, serde_json::Error> {
    let output = FilterOutput {
        filter,
        today,
        total,
        tasks,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats tasks as a table.
pub fn format_tasks_table(tasks: &[&Task], today: NaiveDate, use_colors: bool) -> String {
    if tasks.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let mut output = String::new();

    // Header
    let header = format!(
        "{:<10} {:<7} {:<12} {:<12} {:<6} {}",
        "ID", "Pri", "Status", "Due", "Est", "Title"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for task in tasks {
        let line = format!(
            "{:<10} {:<7} {:<12} {:<12} {:<6} {}",
            truncate_str(&task.id, 10),
            format_priority(task.priority, use_colors),
            format_status(task.status, use_colors),
            format_due(task.due_date, today, use_colors),
            format_minutes(task.estimated_minutes),
            task.title
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
