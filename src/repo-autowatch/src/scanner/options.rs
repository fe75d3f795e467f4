//! Scan inputs.

use crate::github::MAX_PAGE_SIZE;
use chrono::{DateTime, Utc};

/// Parameters of a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Inclusive lower bound on creation time.
    pub cutoff: DateTime<Utc>,

    /// Maximum number of repositories inspected (not watched).
    pub limit: usize,

    /// Whether archived repositories are eligible.
    pub include_archived: bool,

    /// Whether to skip the write calls.
    pub dry_run: bool,
}

impl ScanOptions {
    /// Creates options that watch non-archived repositories for real.
    #[must_use]
    pub fn new(cutoff: DateTime<Utc>, limit: usize) -> Self {
        Self {
            cutoff,
            limit,
            include_archived: false,
            dry_run: false,
        }
    }

    /// Sets whether archived repositories are eligible.
    #[must_use]
    pub fn with_include_archived(mut self, include_archived: bool) -> Self {
        self.include_archived = include_archived;
        self
    }

    /// Sets dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Page size used for listing: `min(100, limit)`, never zero.
    #[must_use]
    pub fn page_size(&self) -> u8 {
        let size = self.limit.clamp(1, usize::from(MAX_PAGE_SIZE));
        u8::try_from(size).unwrap_or(MAX_PAGE_SIZE)
    }

    /// Worst-case number of API calls the scan can make.
    #[must_use]
    pub fn estimated_calls(&self) -> usize {
        let pages = self.limit.div_ceil(usize::from(self.page_size())) + 1;
        if self.dry_run {
            pages
        } else {
            pages + self.limit
        }
    }
}
