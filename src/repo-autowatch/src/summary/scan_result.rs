//! Scan tally.

use super::result::ItemOutcome;
use serde::Serialize;

/// Counters accumulated over one scan.
///
/// Every inspected repository is counted in `processed` and in exactly one
/// other bucket, so `processed` always equals [`ScanResult::classified`] once
/// the item has been recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Number of repositories inspected.
    pub processed: usize,

    /// Number of repositories whose watch subscription was set.
    pub watched: usize,

    /// Number of repositories a dry run would have watched.
    pub would_watch: usize,

    /// Number of repositories skipped (archived or unnamed).
    pub skipped: usize,

    /// Number of repositories whose write call failed.
    pub failed: usize,

    /// Number of repositories older than the cutoff (at most one: it stops the scan).
    pub beyond_cutoff: usize,
}

impl ScanResult {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a repository as inspected.
    pub fn begin_item(&mut self) {
        self.processed += 1;
    }

    /// Classifies the repository most recently passed to [`ScanResult::begin_item`].
    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Watched => self.watched += 1,
            ItemOutcome::WouldWatch => self.would_watch += 1,
            ItemOutcome::Skipped { .. } => self.skipped += 1,
            ItemOutcome::Failed { .. } => self.failed += 1,
            ItemOutcome::BeyondCutoff => self.beyond_cutoff += 1,
        }
    }

    /// Sum of all classification buckets.
    #[must_use]
    pub fn classified(&self) -> usize {
        self.watched + self.would_watch + self.skipped + self.failed + self.beyond_cutoff
    }

    /// Returns true if any write call failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Returns true if no write call failed.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.failed == 0
    }
}
