//! GitHub API error types.

use thiserror::Error;

/// Errors returned by [`RepositoryService`](super::RepositoryService) operations.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The account does not exist or is not visible to the token.
    #[error("Account '{login}' was not found")]
    AccountNotFound { login: String },

    /// Repository name is not in `owner/name` form.
    #[error("Invalid repository name '{full_name}', expected 'owner/name'")]
    InvalidFullName { full_name: String },

    /// A listing page was not ordered by creation time, newest first.
    #[error("Listing page {page} is not sorted by creation time (newest first)")]
    UnsortedPage { page: u32 },

    /// The subscription endpoint answered without enabling the subscription.
    #[error("Subscription for {full_name} was not applied")]
    SubscriptionNotApplied { full_name: String },
}
