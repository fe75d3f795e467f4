//! Repository owners and owner-kind resolution.

mod error;
mod kind;

pub use error::ParseOwnerKindError;
pub use kind::OwnerKind;

use crate::github::{GitHubError, RepositoryService};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// An account whose repositories are scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    /// Account login.
    pub login: String,

    /// Whether the account is a user or an organization.
    pub kind: OwnerKind,
}

impl Owner {
    /// Creates an owner with a known kind.
    pub fn new(login: impl Into<String>, kind: OwnerKind) -> Self {
        Self {
            login: login.into(),
            kind,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.login, self.kind)
    }
}

/// Resolves an owner, probing the account type when `kind` is not supplied.
///
/// # Errors
///
/// Returns [`GitHubError`] if the account lookup fails.
pub async fn resolve_owner<S>(
    service: &S,
    login: &str,
    kind: Option<OwnerKind>,
) -> Result<Owner, GitHubError>
where
    S: RepositoryService + ?Sized,
{
    let kind = match kind {
        Some(kind) => {
            debug!(owner = %login, kind = %kind, "Using configured owner kind");
            kind
        }
        None => {
            let kind = service.resolve_owner_kind(login).await?;
            info!(owner = %login, kind = %kind, "Resolved owner kind");
            kind
        }
    };
    Ok(Owner::new(login, kind))
}
