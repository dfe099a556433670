//! Loading tasks and smart filters from disk.

use std::fs;
use std::path::Path;

use bruh_engine_rs::filter::SmartFilterConfig;
use bruh_model_rs::models::Task;
use tracing::debug;

use super::config::Config;
use super::{CommandError, Result};
use crate::cli::FilterSource;

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CommandError::Input {
        path: path.display().to_string(),
        source,
    })
}

/// Reads a JSON array of tasks.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = read_file(path)?;
    let tasks: Vec<Task> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Reads a smart filter from a JSON file.
pub fn load_filter_file(path: &Path) -> Result<SmartFilterConfig> {
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Resolves a filter from either a file or a saved name.
///
/// Returns the filter together with a label used in output.
pub fn resolve_filter(source: &FilterSource, config: &Config) -> Result<(String, SmartFilterConfig)> {
    if let Some(path) = &source.config {
        return Ok((path.display().to_string(), load_filter_file(path)?));
    }

    let name = source.name.as_deref().unwrap_or_default();
    config
        .filters
        .get(name)
        .cloned()
        .map(|filter| (name.to_string(), filter))
        .ok_or_else(|| CommandError::UnknownFilter(name.to_string()))
}
