//! Scan error types.

use crate::github::GitHubError;
use thiserror::Error;

/// Errors that abort a scan.
///
/// Write failures are never reported here; they are recorded per repository.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A listing call failed, so no further repository can be classified.
    #[error("Failed to list repositories (page {page}): {source}")]
    Listing {
        page: u32,
        #[source]
        source: GitHubError,
    },
}
