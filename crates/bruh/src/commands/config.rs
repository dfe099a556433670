//! Config command implementation.
//!
//! View configuration settings and saved filters.
//! Config file is located at ~/.config/bruh/config.toml.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use bruh_engine_rs::dates::{DateResolver, WeekStart};
use bruh_engine_rs::filter::SmartFilterConfig;
use bruh_engine_rs::focus::{FocusSettings, MAX_SESSIONS_BEFORE_LONG_BREAK};
use bruh_engine_rs::matrix::ClassifierOptions;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable that overrides the config file location.
const CONFIG_ENV: &str = "BRUH_CONFIG";

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Date token settings.
    #[serde(default)]
    pub dates: DatesConfig,

    /// Eisenhower matrix settings.
    #[serde(default)]
    pub matrix: ClassifierOptions,

    /// Focus timer settings.
    #[serde(default)]
    pub focus: FocusSettings,

    /// Saved smart filters by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, SmartFilterConfig>,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            output: OutputConfig::default(),
            dates: DatesConfig::default(),
            matrix: ClassifierOptions::default(),
            focus: FocusSettings::default(),
            filters: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Builds the date resolver for symbolic filter dates.
    pub fn date_resolver(&self) -> DateResolver {
        DateResolver::new(self.dates.week_start)
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Date configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DatesConfig {
    /// First day of the week for `end_of_week`.
    #[serde(default)]
    pub week_start: WeekStart,
}

/// Gets the config file path.
///
/// Resolution order: `$BRUH_CONFIG`, `$XDG_CONFIG_HOME/bruh/config.toml`,
/// then `~/.config/bruh/config.toml`.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("bruh").join("config.toml"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("bruh").join("config.toml"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Loads the configuration from disk.
///
/// A missing file yields the default configuration.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config = parse_config(&content)?;
    debug!(
        path = %path.display(),
        saved_filters = config.filters.len(),
        "loaded config"
    );
    Ok(config)
}

/// Parses and migrates config file contents.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    let config = migrate_config(config)?;
    validate_config(&config)?;
    Ok(config)
}

/// Rejects values the engine cannot work with.
fn validate_config(config: &Config) -> Result<()> {
    let sessions = config.focus.sessions_before_long_break;
    if !(1..=MAX_SESSIONS_BEFORE_LONG_BREAK).contains(&sessions) {
        return Err(CommandError::Config(format!(
            "focus.sessions_before_long_break must be between 1 and {}, got {}",
            MAX_SESSIONS_BEFORE_LONG_BREAK, sessions
        )));
    }
    Ok(())
}

/// Migrates config to current version if needed.
/// Returns the config as-is if already at current version.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the initial schema; later migrations chain here.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext, config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        println!("[output]");
        if let Some(color) = config.output.color {
            println!("  color: {}", color);
        }

        println!("\n[dates]");
        println!("  week_start: {:?}", config.dates.week_start);

        println!("\n[matrix]");
        println!("  urgent_window_days: {}", config.matrix.urgent_window_days);

        println!("\n[focus]");
        println!("  focus_minutes: {}", config.focus.focus_minutes);
        println!("  short_break_minutes: {}", config.focus.short_break_minutes);
        println!("  long_break_minutes: {}", config.focus.long_break_minutes);
        println!(
            "  sessions_before_long_break: {}",
            config.focus.sessions_before_long_break
        );

        if !config.filters.is_empty() {
            println!("\n[filters]");
            for (name, filter) in &config.filters {
                println!(
                    "  {}: {} condition(s), {:?}",
                    name,
                    filter.conditions.len(),
                    filter.logic
                );
            }
        }
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bruh_engine_rs::filter::{Logic, SortDirection};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.output.color.is_none());
        assert_eq!(config.dates.week_start, WeekStart::Monday);
        assert_eq!(config.matrix.urgent_window_days, 3);
        assert_eq!(config.focus.focus_minutes, 25);
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config = parse_config("").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_config_deserialization_partial() {
        let toml_str = r#"
[dates]
week_start = "sunday"

[matrix]
urgent_window_days = 5

[focus]
focus_minutes = 50
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.dates.week_start, WeekStart::Sunday);
        assert_eq!(config.matrix.urgent_window_days, 5);
        assert_eq!(config.focus.focus_minutes, 50);
        assert_eq!(config.focus.short_break_minutes, 5);
    }

    #[test]
    fn test_config_saved_filters() {
        let toml_str = r#"
[filters.this_week]
logic = "and"
conditions = [
    { field = "due_date", operator = "lte", value = "end_of_week" },
    { field = "status", operator = "in", value = ["pending", "in_progress"] },
]
sort = { field = "due_date", direction = "asc" }

[filters.quick]
conditions = [{ field = "estimated_minutes", operator = "lte", value = 15 }]
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.filters.len(), 2);

        let this_week = &config.filters["this_week"];
        assert_eq!(this_week.conditions.len(), 2);
        assert_eq!(this_week.logic, Logic::And);
        assert_eq!(
            this_week.sort.as_ref().map(|s| s.direction),
            Some(SortDirection::Asc)
        );

        let quick = &config.filters["quick"];
        assert_eq!(quick.conditions[0].value, serde_json::json!(15));
        assert_eq!(quick.logic, Logic::And);
    }

    #[test]
    fn test_config_with_future_version_is_migrated() {
        let config = parse_config("version = 99").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_config_rejects_out_of_range_sessions() {
        let err = parse_config("[focus]\nsessions_before_long_break = 0\n").unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));

        let err = parse_config("[focus]\nsessions_before_long_break = 5000000\n").unwrap_err();
        assert!(err.to_string().contains("between 1 and 24"));

        let config = parse_config("[focus]\nsessions_before_long_break = 24\n").unwrap();
        assert_eq!(config.focus.sessions_before_long_break, 24);
    }

    #[test]
    fn test_config_invalid_toml() {
        let err = parse_config("[matrix\nurgent_window_days = ").unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 1"));
        assert!(toml_str.contains("urgent_window_days = 3"));
        assert!(!toml_str.contains("[filters]"));
    }

    #[test]
    #[serial]
    fn test_load_config_from_env_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[matrix]\nurgent_window_days = 1\n").unwrap();

        let original = env::var(CONFIG_ENV).ok();
        env::set_var(CONFIG_ENV, &config_path);

        let path = get_config_path();
        let result = load_config();

        match original {
            Some(val) => env::set_var(CONFIG_ENV, val),
            None => env::remove_var(CONFIG_ENV),
        }

        assert_eq!(path.unwrap(), config_path);
        assert_eq!(result.unwrap().matrix.urgent_window_days, 1);
    }

    #[test]
    #[serial]
    fn test_show_uses_loaded_config_without_rereading() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[matrix\nbroken").unwrap();

        let original = env::var(CONFIG_ENV).ok();
        env::set_var(CONFIG_ENV, &config_path);

        let ctx = CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            verbose: false,
            today: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        let result = execute_show(&ctx, &Config::default());

        match original {
            Some(val) => env::set_var(CONFIG_ENV, val),
            None => env::remove_var(CONFIG_ENV),
        }

        assert!(result.is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        let original = env::var(CONFIG_ENV).ok();
        env::set_var(CONFIG_ENV, &config_path);

        let result = load_config();

        match original {
            Some(val) => env::set_var(CONFIG_ENV, val),
            None => env::remove_var(CONFIG_ENV),
        }

        assert_eq!(result.unwrap().matrix.urgent_window_days, 3);
    }
}
