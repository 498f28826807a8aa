//! Task list input.

use std::fs;
use std::path::Path;

use tarefas_core::default_tasks;
use tracing::debug;

use crate::error::CliError;

/// Load tasks from a file.
///
/// Files ending in `.json` must hold a JSON array of strings. Any other file
/// is read one task per line; blank lines and lines starting with `#` are
/// skipped.
pub fn load_tasks(path: &Path) -> Result<Vec<String>, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let tasks: Vec<String> = if is_json {
        serde_json::from_str(&content).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    };

    debug!(path = %path.display(), count = tasks.len(), json = is_json, "Loaded tasks");
    Ok(tasks)
}

/// Combine file tasks and positional tasks, falling back to the default
/// task list when both are empty.
pub fn resolve_tasks(file: Option<&Path>, tasks: Vec<String>) -> Result<Vec<String>, CliError> {
    let mut resolved = match file {
        Some(path) => load_tasks(path)?,
        None => Vec::new(),
    };
    resolved.extend(tasks);

    if resolved.is_empty() {
        debug!("No tasks given, using defaults");
        return Ok(default_tasks());
    }
    Ok(resolved)
}
