//! CLI for the Projects Page Builder.
//!
//! This tool fetches metadata for a configured list of GitHub repositories
//! and regenerates the static projects page from an HTML template.

use clap::Parser;
use projects_page_builder::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Projects Page Builder - Generate a static projects page from GitHub repository metadata.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the projects file.
    #[arg(long, default_value = "projects.json")]
    config: PathBuf,

    /// Path to the page template.
    #[arg(long, default_value = "projects-template.html")]
    template: PathBuf,

    /// Path the generated page is written to.
    #[arg(long, default_value = "site/projects.html")]
    output: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Tracing is Rust's structured logging/diagnostics framework. Unlike traditional
/// logging, it's async-aware and captures contextual, structured data rather than
/// just text. The subscriber configured here determines how events (from macros
/// like `info!`, `debug!`, etc.) are collected and displayed.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.config, args.template, args.output, args.token);
    let runner = Runner::new(config);
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    if summary.has_failures() {
        eprintln!("\nSome projects failed to fetch:");
        for failure in &summary.failures {
            eprintln!("  - {}: {}", failure.repository, failure.error);
        }
    }

    match &summary.output_path {
        Some(path) => {
            println!(
                "\nGenerated projects page with {} of {} projects: {}",
                summary.projects_rendered,
                summary.projects_configured,
                path.display()
            );
        }
        None => println!("\nNo projects to display."),
    }
}
