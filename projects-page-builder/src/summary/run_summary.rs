//! Run summary types.

use super::failure::FetchFailure;
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories listed in the configuration.
    pub projects_configured: usize,

    /// Number of repositories rendered into the generated page.
    pub projects_rendered: usize,

    /// Repositories whose fetch failed, in configuration order.
    pub failures: Vec<FetchFailure>,

    /// Path of the written page, or `None` when nothing was generated.
    pub output_path: Option<PathBuf>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a repository whose fetch failed.
    pub fn record_failure(&mut self, repository: String, error: String) {
        self.failures.push(FetchFailure { repository, error });
    }

    /// Returns true if any fetch failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns true if a page was written.
    #[must_use]
    pub fn wrote_output(&self) -> bool {
        self.output_path.is_some()
    }
}
