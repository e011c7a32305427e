#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod github;
pub mod runner;
pub mod summary;
pub mod templates;

pub use config::{load_projects, ConfigError, ProjectConfig};
pub use github::{fetch_repository, FetchError, RepositoryMetadata};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{FetchFailure, RunSummary};
pub use templates::{
    escape_html, language_color, render_item, PageTemplate, TemplateError, END_MARKER,
    START_MARKER,
};
