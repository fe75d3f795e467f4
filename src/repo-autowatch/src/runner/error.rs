//! Runner error types.

use crate::github::GitHubError;
use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Settings file errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Cutoff could not be built.
    #[error(transparent)]
    Cutoff(#[from] crate::cutoff::CutoffError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// No GitHub token could be found.
    #[error("No GitHub token found; pass --token, set GITHUB_TOKEN or GH_TOKEN, or run 'gh auth login'")]
    MissingToken,

    /// The limit must be positive.
    #[error("Limit must be greater than zero")]
    InvalidLimit,

    /// The authenticated identity could not be resolved.
    #[error("Failed to resolve authenticated identity: {source}")]
    Identity {
        #[source]
        source: GitHubError,
    },

    /// The owner's account type could not be resolved.
    #[error("Failed to resolve owner kind for '{owner}': {source}")]
    OwnerKind {
        owner: String,
        #[source]
        source: GitHubError,
    },

    /// The scan was aborted by a listing failure.
    #[error(transparent)]
    Scan(#[from] crate::scanner::ScanError),
}
