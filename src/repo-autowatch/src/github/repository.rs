//! Repository summaries returned by the listing endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The fields of a listed repository that drive the scan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositorySummary {
    /// Full repository name in "owner/name" format. Empty when the API omitted it or sent null.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,

    /// When the repository was created.
    pub created_at: DateTime<Utc>,

    /// Whether the repository is archived.
    #[serde(default)]
    pub archived: bool,
}

impl RepositorySummary {
    /// Creates a summary for a non-archived repository.
    pub fn new(full_name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            full_name: full_name.into(),
            created_at,
            archived: false,
        }
    }

    /// Marks the repository as archived.
    #[must_use]
    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
