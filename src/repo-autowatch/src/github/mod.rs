//! GitHub operations consumed by the scanner.
//!
//! [`RepositoryService`] names the calls a scan needs: identity lookup,
//! owner-kind lookup, repository listing and the watch write. [`GitHubClient`]
//! implements them on top of `octocrab`.

mod client;
mod error;
mod repository;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use repository::RepositorySummary;

use crate::owner::{Owner, OwnerKind};
use async_trait::async_trait;

/// Largest page size accepted by the GitHub listing endpoints.
pub const MAX_PAGE_SIZE: u8 = 100;

/// External operations used while scanning an owner's repositories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Returns the login of the authenticated identity.
    async fn authenticated_login(&self) -> Result<String, GitHubError>;

    /// Looks up whether `login` is a user or an organization.
    async fn resolve_owner_kind(&self, login: &str) -> Result<OwnerKind, GitHubError>;

    /// Fetches one page (1-based) of the owner's repositories, newest first.
    async fn list_repositories(
        &self,
        owner: &Owner,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, GitHubError>;

    /// Sets the watch subscription of a repository.
    async fn set_watch(
        &self,
        full_name: &str,
        subscribed: bool,
        ignored: bool,
    ) -> Result<(), GitHubError>;
}
