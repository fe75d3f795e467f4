//! `octocrab` implementation of [`RepositoryService`].

use super::{GitHubError, RepositoryService, RepositorySummary};
use crate::owner::{Owner, OwnerKind};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query parameters for the repository listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ListParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    repo_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    affiliation: Option<&'static str>,
    sort: &'static str,
    direction: &'static str,
    per_page: u8,
    page: u32,
}

/// Request body for `PUT /repos/{owner}/{repo}/subscription`.
#[derive(Debug, Serialize)]
struct SubscriptionRequest {
    subscribed: bool,
    ignored: bool,
}

/// Subscription state echoed back by GitHub.
#[derive(Debug, Deserialize)]
struct Subscription {
    #[serde(default)]
    subscribed: bool,
}

/// Account lookup response; only the account type is needed.
#[derive(Debug, Deserialize)]
struct Account {
    #[serde(rename = "type")]
    account_type: String,
}

/// GitHub REST client used for real scans.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    viewer: Option<String>,
}

impl GitHubClient {
    /// Wraps an existing `octocrab` instance.
    pub fn new(octocrab: Octocrab) -> Self {
        Self {
            octocrab,
            viewer: None,
        }
    }

    /// Builds a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the HTTP client cannot be constructed.
    pub fn with_token(token: impl Into<String>) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(Self::new(octocrab))
    }

    /// Records the authenticated login.
    ///
    /// Listing the viewer's own repositories then goes through `/user/repos`,
    /// which also returns private repositories.
    #[must_use]
    pub fn with_viewer(mut self, login: impl Into<String>) -> Self {
        self.viewer = Some(login.into());
        self
    }

    /// Returns the underlying `octocrab` instance.
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl RepositoryService for GitHubClient {
    async fn authenticated_login(&self) -> Result<String, GitHubError> {
        let user = self.octocrab.current().user().await?;
        Ok(user.login)
    }

    async fn resolve_owner_kind(&self, login: &str) -> Result<OwnerKind, GitHubError> {
        let route = format!("/users/{login}");
        let account: Account = self
            .octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| map_account_error(login, e))?;
        Ok(OwnerKind::from_account_type(&account.account_type))
    }

    async fn list_repositories(
        &self,
        owner: &Owner,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, GitHubError> {
        let (route, params) = listing_request(owner, self.viewer.as_deref(), page, per_page);
        debug!(route = %route, page, per_page, "Listing repositories");

        let repositories: Vec<RepositorySummary> = self
            .octocrab
            .get(route, Some(&params))
            .await
            .map_err(|e| map_account_error(&owner.login, e))?;

        ensure_newest_first(page, &repositories)?;
        Ok(repositories)
    }

    async fn set_watch(
        &self,
        full_name: &str,
        subscribed: bool,
        ignored: bool,
    ) -> Result<(), GitHubError> {
        let route = subscription_route(full_name)?;
        let body = SubscriptionRequest {
            subscribed,
            ignored,
        };
        let subscription: Subscription = self.octocrab.put(route, Some(&body)).await?;

        if subscription.subscribed != subscribed {
            return Err(GitHubError::SubscriptionNotApplied {
                full_name: full_name.to_string(),
            });
        }
        Ok(())
    }
}

/// Picks the listing route and query for an owner.
///
/// Users listing their own account go through `/user/repos` so that private
/// repositories are included.
fn listing_request(
    owner: &Owner,
    viewer: Option<&str>,
    page: u32,
    per_page: u8,
) -> (String, ListParams) {
    let mut params = ListParams {
        repo_type: None,
        affiliation: None,
        sort: "created",
        direction: "desc",
        per_page,
        page,
    };

    let route = match owner.kind {
        OwnerKind::Organization => {
            params.repo_type = Some("all");
            format!("/orgs/{}/repos", owner.login)
        }
        OwnerKind::User if viewer.is_some_and(|v| v.eq_ignore_ascii_case(&owner.login)) => {
            params.affiliation = Some("owner");
            "/user/repos".to_string()
        }
        OwnerKind::User => {
            params.repo_type = Some("owner");
            format!("/users/{}/repos", owner.login)
        }
    };

    (route, params)
}

/// Builds the subscription route for an `owner/name` repository.
fn subscription_route(full_name: &str) -> Result<String, GitHubError> {
    match full_name.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(format!("/repos/{owner}/{name}/subscription"))
        }
        _ => Err(GitHubError::InvalidFullName {
            full_name: full_name.to_string(),
        }),
    }
}

/// Rejects a page that breaks the newest-first ordering early stop relies on.
fn ensure_newest_first(page: u32, repositories: &[RepositorySummary]) -> Result<(), GitHubError> {
    let sorted = repositories
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at);
    if sorted {
        Ok(())
    } else {
        Err(GitHubError::UnsortedPage { page })
    }
}

/// Converts a 404 on an account route into [`GitHubError::AccountNotFound`].
fn map_account_error(login: &str, error: octocrab::Error) -> GitHubError {
    match &error {
        octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404 => {
            GitHubError::AccountNotFound {
                login: login.to_string(),
            }
        }
        _ => GitHubError::Api(error),
    }
}
