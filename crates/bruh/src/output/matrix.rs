//! Eisenhower board output formatting.

use std::collections::BTreeMap;

use bruh_engine_rs::matrix::Quadrant;
use bruh_model_rs::models::Task;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_due, format_priority, truncate_str};

/// JSON output for one quadrant.
#[derive(Serialize)]
pub struct QuadrantOutput<'a> {
    pub quadrant: Quadrant,
    pub description: &'static str,
    pub tasks: &'a [&'a Task],
}

/// JSON output structure for the matrix command.
#[derive(Serialize)]
pub struct BoardOutput<'a> {
    pub today: NaiveDate,
    pub urgent_window_days: u32,
    pub quadrants: Vec<QuadrantOutput<'a>>,
}

/// Formats a quadrant board as JSON.
pub fn format_board_json(
    board: &BTreeMap<Quadrant, Vec<&Task>>,
    today: NaiveDate,
    urgent_window_days: u32,
) -> Result<String, serde_json::Error> {
    let quadrants = board
        .iter()
        .map(|(quadrant, tasks)| QuadrantOutput {
            quadrant: *quadrant,
            description: quadrant.description(),
            tasks: tasks.as_slice(),
        })
        .collect();

    serde_json::to_string_pretty(&BoardOutput {
        today,
        urgent_window_days,
        quadrants,
    })
}

/// Formats a quadrant board as one section per quadrant.
pub fn format_board_table(
    board: &BTreeMap<Quadrant, Vec<&Task>>,
    today: NaiveDate,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    for (quadrant, tasks) in board {
        let heading = format!(
            "{} - {} ({})",
            quadrant.as_str().to_uppercase(),
            quadrant.description(),
            tasks.len()
        );
        if use_colors {
            let colored = match quadrant {
                Quadrant::Do => heading.red().bold().to_string(),
                Quadrant::Schedule => heading.blue().bold().to_string(),
                Quadrant::Delegate => heading.yellow().bold().to_string(),
                Quadrant::Eliminate => heading.dimmed().to_string(),
            };
            output.push_str(&colored);
        } else {
            output.push_str(&heading);
        }
        output.push('\n');

        if tasks.is_empty() {
            output.push_str("  (empty)\n");
        }
        for task in tasks {
            let line = format!(
                "  {:<10} {:<7} {:<12} {}",
                truncate_str(&task.id, 10),
                format_priority(task.priority, use_colors),
                format_due(task.due_date, today, use_colors),
                task.title
            );
            output.push_str(line.trim_end());
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use bruh_engine_rs::matrix::classify_all;
    use bruh_model_rs::models::Priority;
    use chrono::{TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn tasks() -> Vec<Task> {
        let mut fire = Task::new("fire", Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
        fire.priority = Priority::Urgent;
        fire.title = "Put out fire".to_string();
        vec![fire]
    }

    #[test]
    fn test_board_table_sections() {
        let tasks = tasks();
        let board = classify_all(&tasks, today());
        let table = format_board_table(&board, today(), false);

        assert!(table.starts_with("DO - Urgent & important (1)\n  fire"));
        assert!(table.contains("SCHEDULE - Important, not urgent (0)\n  (empty)"));
        assert!(table.contains("ELIMINATE"));
    }

    #[test]
    fn test_board_json() {
        let tasks = tasks();
        let board = classify_all(&tasks, today());
        let json = format_board_json(&board, today(), 3).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["urgent_window_days"], 3);
        assert_eq!(value["quadrants"].as_array().unwrap().len(), 4);
        assert_eq!(value["quadrants"][0]["quadrant"], "do");
        assert_eq!(value["quadrants"][0]["tasks"][0]["id"], "fire");
        assert_eq!(value["quadrants"][3]["tasks"], serde_json::json!([]));
    }
}
