//! Orchestrates a full page generation run.

use crate::config::{load_projects, ConfigError};
use crate::github::{fetch_repository, RepositoryMetadata};
use crate::summary::RunSummary;
use crate::templates::{PageTemplate, TemplateError};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Configuration for running the page builder.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the projects file.
    config_path: PathBuf,
    /// Path to the page template.
    template_path: PathBuf,
    /// Path the generated page is written to.
    output_path: PathBuf,
    /// GitHub token used for API calls, if any.
    token: Option<String>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        config_path: PathBuf,
        template_path: PathBuf,
        output_path: PathBuf,
        token: Option<String>,
    ) -> Self {
        Self {
            config_path,
            template_path,
            output_path,
            token,
        }
    }

    /// Returns the projects file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the page template path.
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Returns the output file path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Errors that abort a run.
///
/// Per-repository fetch failures are not represented here; they are
/// collected in the [`RunSummary`] instead.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Project list loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Template loading and parsing errors.
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// Failed to write the generated page.
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Orchestrates a full fetch-and-generate run.
pub struct Runner {
    config: RunnerConfig,
    client: Client,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Executes the full generation flow.
    ///
    /// Fetches every configured repository sequentially, in file order.
    /// Failed fetches are recorded in the summary and skipped. The
    /// successes are sorted by last update, most recent first, rendered
    /// into the template, and written out. When no repository could be
    /// fetched, the template is never touched and no file is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the project list or template can't be loaded,
    /// or if the output file can't be written.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();

        let projects = load_projects(self.config.config_path())?;
        summary.projects_configured = projects.len();

        info!("Fetching project details from GitHub");
        let mut repositories = Vec::with_capacity(projects.len());
        for project in &projects {
            let full_name = project.full_name();
            info!(repo = %full_name, "Fetching repository");

            match fetch_repository(&self.client, self.config.token(), project).await {
                Ok(metadata) => repositories.push(metadata),
                Err(e) => {
                    error!(repo = %full_name, error = %e, "Failed to fetch repository");
                    summary.record_failure(full_name, e.to_string());
                }
            }
        }

        if repositories.is_empty() {
            warn!("No projects to display");
            return Ok(summary);
        }

        sort_by_last_update(&mut repositories);
        self.generate(&repositories, &mut summary)?;

        Ok(summary)
    }

    /// Renders the repositories into the template and writes the page.
    fn generate(
        &self,
        repositories: &[RepositoryMetadata],
        summary: &mut RunSummary,
    ) -> Result<(), RunnerError> {
        let template = PageTemplate::load(self.config.template_path())?;
        let page = template.render_page(repositories);

        let output_path = self.config.output_path();
        std::fs::write(output_path, page).map_err(|e| RunnerError::WriteError {
            path: output_path.display().to_string(),
            source: e,
        })?;

        summary.projects_rendered = repositories.len();
        summary.output_path = Some(output_path.to_path_buf());
        info!(
            count = repositories.len(),
            path = %output_path.display(),
            "Generated projects page"
        );

        Ok(())
    }
}

/// Sorts repositories by last update, most recent first.
///
/// The sort is stable, so repositories updated at the same instant keep
/// their fetch order.
fn sort_by_last_update(repositories: &mut [RepositoryMetadata]) {
    repositories.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
