//! CLI for repo-autowatch.
//!
//! Watches every recently created repository of a GitHub user or
//! organization, skipping archived repositories unless asked otherwise.

use clap::Parser;
use repo_autowatch::{
    load_settings, resolve_token, OwnerKind, Runner, RunnerConfig, RunnerError, ScanReport,
    CONFIG_ENV,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repo Autowatch - Watch the newest repositories of a user or organization.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Account whose repositories are watched (defaults to the authenticated user).
    #[arg(long)]
    owner: Option<String>,

    /// Owner kind: user or organization (looked up when omitted).
    #[arg(long)]
    owner_kind: Option<OwnerKind>,

    /// Only watch repositories created on or after this date (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    since: Option<String>,

    /// Only watch repositories created in the last N days [default: 30].
    #[arg(long)]
    days: Option<u32>,

    /// Maximum number of repositories to inspect [default: 100].
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,

    /// Also watch archived repositories.
    #[arg(long)]
    include_archived: bool,

    /// Preview without changing any subscription.
    #[arg(long)]
    dry_run: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Path to a TOML settings file.
    #[arg(long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token (falls back to GH_TOKEN, then `gh auth token`).
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();
    let json = args.json;

    // Run the main logic
    match run(args).await {
        Ok(report) => {
            if json {
                print_json(&report);
            } else {
                print_summary(&report);
            }

            if report.all_success() {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<ScanReport, RunnerError> {
    let token = resolve_token(args.token).await?;
    let mut config = RunnerConfig::new(token);

    if let Some(path) = args.config {
        config = config.with_settings(load_settings(&path)?);
    }
    if let Some(owner) = args.owner {
        config = config.with_owner(owner);
    }
    if let Some(kind) = args.owner_kind {
        config = config.with_owner_kind(kind);
    }
    // `--since` is applied last so it wins over `--days`.
    if let Some(days) = args.days {
        config = config.with_days(days);
    }
    if let Some(since) = args.since {
        config = config.with_since(since);
    }
    if let Some(limit) = args.limit {
        config = config.with_limit(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    if args.include_archived {
        config = config.with_include_archived(true);
    }
    if args.dry_run {
        config = config.with_dry_run(true);
    }

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the report as pretty JSON.
fn print_json(report: &ScanReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => error!(error = %e, "Failed to serialize report"),
    }
}

/// Prints the final scan summary.
fn print_summary(report: &ScanReport) {
    println!();
    for line in report.summary_lines() {
        println!("{line}");
    }
}
