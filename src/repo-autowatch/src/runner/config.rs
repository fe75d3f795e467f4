//! Runner configuration.

use crate::config::Settings;
use crate::cutoff::resolve_cutoff;
use crate::owner::OwnerKind;
use crate::runner::RunnerError;
use crate::scanner::ScanOptions;
use chrono::{DateTime, Utc};

/// Default maximum number of repositories inspected per run.
pub const DEFAULT_LIMIT: usize = 100;

/// Configuration for a single watch run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub token used for API calls.
    token: String,
    /// Account to scan; defaults to the authenticated identity.
    owner: Option<String>,
    /// Owner kind; looked up when unset.
    owner_kind: Option<OwnerKind>,
    /// Explicit cutoff text.
    since: Option<String>,
    /// Look-back window in days.
    days: Option<u32>,
    /// Maximum number of repositories inspected.
    limit: usize,
    /// Whether archived repositories are eligible.
    include_archived: bool,
    /// Whether to preview without watching.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a configuration with default values.
    pub fn new(token: String) -> Self {
        Self {
            token,
            owner: None,
            owner_kind: None,
            since: None,
            days: None,
            limit: DEFAULT_LIMIT,
            include_archived: false,
            dry_run: false,
        }
    }

    /// Applies every value present in a settings file.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        if let Some(owner) = settings.owner {
            self.owner = Some(owner);
        }
        if let Some(kind) = settings.owner_kind {
            self.owner_kind = Some(kind);
        }
        if let Some(since) = settings.since {
            self.since = Some(since);
        }
        if let Some(days) = settings.days {
            self.days = Some(days);
        }
        if let Some(limit) = settings.limit {
            self.limit = limit;
        }
        if let Some(include_archived) = settings.include_archived {
            self.include_archived = include_archived;
        }
        if let Some(dry_run) = settings.dry_run {
            self.dry_run = dry_run;
        }
        self
    }

    /// Sets the owner to scan.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the owner kind, skipping the account lookup.
    pub fn with_owner_kind(mut self, kind: OwnerKind) -> Self {
        self.owner_kind = Some(kind);
        self
    }

    /// Sets an explicit cutoff (RFC 3339 or `YYYY-MM-DD`), replacing any day count.
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self.days = None;
        self
    }

    /// Sets the look-back window in days, replacing any explicit cutoff.
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self.since = None;
        self
    }

    /// Sets the maximum number of repositories inspected.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets whether archived repositories are eligible.
    pub fn with_include_archived(mut self, include_archived: bool) -> Self {
        self.include_archived = include_archived;
        self
    }

    /// Sets dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the configured owner, if any.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Returns the configured owner kind, if any.
    pub fn owner_kind(&self) -> Option<OwnerKind> {
        self.owner_kind
    }

    /// Returns the maximum number of repositories inspected.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns whether archived repositories are eligible.
    pub fn include_archived(&self) -> bool {
        self.include_archived
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Builds scan options, resolving the cutoff relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] for a zero limit or an invalid cutoff.
    pub fn scan_options(&self, now: DateTime<Utc>) -> Result<ScanOptions, RunnerError> {
        if self.limit == 0 {
            return Err(RunnerError::InvalidLimit);
        }
        let cutoff = resolve_cutoff(self.since.as_deref(), self.days, now)?;
        Ok(ScanOptions::new(cutoff, self.limit)
            .with_include_archived(self.include_archived)
            .with_dry_run(self.dry_run))
    }
}
