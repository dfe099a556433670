//! Focus command implementation.
//!
//! Prints the phases of one focus cycle.

use bruh_engine_rs::focus::{FocusSettings, FocusTimer};

use super::config::Config;
use super::{CommandContext, Result};
use crate::output::{format_plan_json, format_plan_table};

/// Executes the focus plan command.
pub fn execute_plan(
    ctx: &CommandContext,
    config: &Config,
    focus: Option<u32>,
    sessions: Option<u32>,
) -> Result<()> {
    let settings = plan_settings(config.focus, focus, sessions);
    let plan = FocusTimer::plan(settings);

    if ctx.json_output {
        println!("{}", format_plan_json(&plan)?);
    } else {
        print!("{}", format_plan_table(&plan, ctx.use_colors));
    }

    Ok(())
}

/// Applies command line overrides to the configured settings.
fn plan_settings(base: FocusSettings, focus: Option<u32>, sessions: Option<u32>) -> FocusSettings {
    FocusSettings {
        focus_minutes: focus.unwrap_or(base.focus_minutes),
        sessions_before_long_break: sessions.unwrap_or(base.sessions_before_long_break),
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_settings_overrides() {
        let base = FocusSettings {
            short_break_minutes: 10,
            ..FocusSettings::default()
        };

        let settings = plan_settings(base, Some(50), None);
        assert_eq!(settings.focus_minutes, 50);
        assert_eq!(settings.sessions_before_long_break, 4);
        assert_eq!(settings.short_break_minutes, 10);

        assert_eq!(plan_settings(base, None, Some(2)).sessions_before_long_break, 2);
    }
}
