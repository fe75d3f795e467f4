//! Scan outcome.

use super::StopReason;
use crate::summary::{RepositoryOutcome, ScanResult};

/// Result of a scan that was not aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Final tally.
    pub result: ScanResult,

    /// Why the scan stopped.
    pub stop: StopReason,

    /// Outcome of every inspected repository, in listing order.
    pub repositories: Vec<RepositoryOutcome>,
}
