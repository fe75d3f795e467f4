//! Orchestrates a watch run.

mod config;
mod error;
mod token;

pub use config::{RunnerConfig, DEFAULT_LIMIT};
pub use error::RunnerError;
pub use token::{resolve_token, token_from_env, TOKEN_ENV_VARS};

use crate::github::{GitHubClient, RepositoryService};
use crate::owner::resolve_owner;
use crate::rate_limit::ensure_core_budget;
use crate::scanner::{scan, ScanOptions};
use crate::summary::ScanReport;
use chrono::Utc;
use tracing::info;

/// Runs a full scan against GitHub.
pub struct Runner {
    config: RunnerConfig,
    client: GitHubClient,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = GitHubClient::with_token(config.token())?;
        Ok(Self { config, client })
    }

    /// Executes the full flow: cutoff, identity, budget check, owner resolution, scan.
    pub async fn run(&self) -> Result<ScanReport, RunnerError> {
        let options = self.config.scan_options(Utc::now())?;

        let viewer = self
            .client
            .authenticated_login()
            .await
            .map_err(|source| RunnerError::Identity { source })?;
        info!(viewer = %viewer, "Authenticated");

        let client = self.client.clone().with_viewer(viewer.clone());
        ensure_core_budget(client.octocrab(), options.estimated_calls()).await;

        execute(&client, &self.config, viewer, options).await
    }
}

/// Resolves the owner and scans its repositories with `service`.
///
/// The owner defaults to `viewer` when the configuration names none.
///
/// # Errors
///
/// Returns [`RunnerError::OwnerKind`] if the owner kind lookup fails and
/// [`RunnerError::Scan`] if a listing call fails.
pub async fn execute<S>(
    service: &S,
    config: &RunnerConfig,
    viewer: String,
    options: ScanOptions,
) -> Result<ScanReport, RunnerError>
where
    S: RepositoryService + ?Sized,
{
    let login = config.owner().unwrap_or(viewer.as_str()).to_string();
    let owner = resolve_owner(service, &login, config.owner_kind())
        .await
        .map_err(|source| RunnerError::OwnerKind {
            owner: login.clone(),
            source,
        })?;
    info!(
        owner = %owner,
        limit = config.limit(),
        include_archived = config.include_archived(),
        dry_run = config.dry_run(),
        "Resolved owner"
    );

    let outcome = scan(service, &owner, &options).await?;
    Ok(ScanReport::new(viewer, owner, &options, outcome))
}
