//! Per-repository outcome types.

use serde::Serialize;

/// Why an inspected repository was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The repository is archived and archived repositories are excluded.
    Archived,
    /// The listing returned no usable `owner/name`.
    MissingName,
}

impl SkipReason {
    /// Returns the reason as a string for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Archived => "archived",
            Self::MissingName => "missing name",
        }
    }
}

/// Classification of a single inspected repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// The watch subscription was set.
    Watched,

    /// Dry run: the repository qualifies but no write was issued.
    WouldWatch,

    /// The repository was not eligible.
    Skipped {
        /// Reason for skipping.
        reason: SkipReason,
    },

    /// The write call failed.
    Failed {
        /// Error message.
        error: String,
    },

    /// Created before the cutoff; this repository ended the scan.
    BeyondCutoff,
}

/// An outcome paired with the repository it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryOutcome {
    /// Repository full name (may be empty for [`SkipReason::MissingName`]).
    pub repository: String,

    /// What happened to the repository.
    #[serde(flatten)]
    pub outcome: ItemOutcome,
}
