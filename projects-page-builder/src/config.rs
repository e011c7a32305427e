//! Project list configuration.
//!
//! This module handles parsing the JSON file that lists which GitHub
//! repositories appear on the generated page.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading the project list.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the projects file.
    #[error("Failed to read projects file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the projects file as JSON.
    #[error("Failed to parse projects file '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single repository entry from the projects file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,
}

impl ProjectConfig {
    /// Returns the repository full name in "owner/repo" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Top-level shape of the projects file.
#[derive(Debug, Deserialize)]
struct ProjectsFile {
    projects: Vec<ProjectConfig>,
}

/// Loads the project list from a JSON file.
///
/// The file structure should be:
/// ```json
/// {
///   "projects": [
///     { "owner": "rust-lang", "repo": "rust" }
///   ]
/// }
/// ```
///
/// # Arguments
///
/// * `path` - Path to the projects file
///
/// # Returns
///
/// The configured repositories in file order. Order matters: it decides
/// fetch order and breaks ties when entries share an update time.
///
/// # Errors
///
/// Returns an error if the file can't be read or isn't valid JSON.
pub fn load_projects(path: &Path) -> Result<Vec<ProjectConfig>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: ProjectsFile = serde_json::from_str(&contents).map_err(|e| ConfigError::JsonError {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(count = file.projects.len(), "Loaded project list");
    Ok(file.projects)
}
