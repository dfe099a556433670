//! Common helper functions for output formatting.

use bruh_engine_rs::dates::days_until;
use bruh_model_rs::models::{Priority, Status};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats priority for display.
pub fn format_priority(priority: Priority, use_colors: bool) -> String {
    let label = priority.as_str();

    if use_colors {
        match priority {
            Priority::Urgent => label.red().bold().to_string(),
            Priority::High => label.yellow().to_string(),
            Priority::Normal => label.blue().to_string(),
            Priority::Low => label.dimmed().to_string(),
        }
    } else {
        label.to_string()
    }
}

/// Formats status for display.
pub fn format_status(status: Status, use_colors: bool) -> String {
    let label = status.as_str();

    if use_colors && status.is_closed() {
        label.dimmed().to_string()
    } else {
        label.to_string()
    }
}

/// Formats a due date relative to `today`.
pub fn format_due(due_date: Option<NaiveDate>, today: NaiveDate, use_colors: bool) -> String {
    let Some(date) = due_date else {
        return String::new();
    };

    let days = days_until(date, today);
    let display = match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        d if d < 0 => format!("{} days ago", -d),
        _ => date.format("%b %d").to_string(),
    };

    if use_colors {
        if days < 0 {
            display.red().to_string()
        } else if days == 0 {
            display.yellow().to_string()
        } else {
            display
        }
    } else {
        display
    }
}

/// Formats an effort estimate.
pub fn format_minutes(minutes: Option<u32>) -> String {
    match minutes {
        None => String::new(),
        Some(m) if m >= 60 && m % 60 == 0 => format!("{}h", m / 60),
        Some(m) if m >= 60 => format!("{}h{:02}m", m / 60, m % 60),
        Some(m) => format!("{m}m"),
    }
}
