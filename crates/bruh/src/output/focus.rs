//! Focus plan output formatting.

use bruh_engine_rs::focus::{FocusPhase, PlannedPhase};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for the focus plan command.
#[derive(Serialize)]
pub struct PlanOutput<'a> {
    pub total_minutes: u64,
    pub phases: &'a [PlannedPhase],
}

fn total_minutes(plan: &[PlannedPhase]) -> u64 {
    plan.iter().map(|p| p.duration.as_secs() / 60).sum()
}

/// Formats a focus plan as JSON.
pub fn format_plan_json(plan: &[PlannedPhase]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PlanOutput {
        total_minutes: total_minutes(plan),
        phases: plan,
    })
}

/// Formats a focus plan as a table.
pub fn format_plan_table(plan: &[PlannedPhase], use_colors: bool) -> String {
    let mut output = String::new();

    let header = format!("{:<8} {:<12} {}", "Session", "Phase", "Minutes");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for step in plan {
        let phase = match (step.phase, use_colors) {
            (FocusPhase::Focus, true) => step.phase.as_str().green().to_string(),
            (_, true) => step.phase.as_str().cyan().to_string(),
            (_, false) => step.phase.as_str().to_string(),
        };
        output.push_str(&format!(
            "{:<8} {:<12} {}\n",
            step.session,
            phase,
            step.duration.as_secs() / 60
        ));
    }

    output.push_str(&format!("\nTotal: {} minutes\n", total_minutes(plan)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use bruh_engine_rs::focus::{FocusSettings, FocusTimer};

    #[test]
    fn test_plan_table() {
        let plan = FocusTimer::plan(FocusSettings::default());
        let table = format_plan_table(&plan, false);

        assert!(table.starts_with("Session"));
        assert!(table.contains("long_break"));
        // 4 x 25 focus + 3 x 5 short + 15 long
        assert!(table.ends_with("Total: 130 minutes\n"));
    }

    #[test]
    fn test_plan_json() {
        let plan = FocusTimer::plan(FocusSettings::default());
        let value: serde_json::Value =
            serde_json::from_str(&format_plan_json(&plan).unwrap()).unwrap();

        assert_eq!(value["total_minutes"], 130);
        assert_eq!(value["phases"].as_array().unwrap().len(), 8);
        assert_eq!(value["phases"][1]["phase"], "short_break");
    }
}
