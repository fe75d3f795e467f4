//! Cutoff-bounded repository scanning.
//!
//! Repositories are listed newest first, so the first non-archived repository
//! created before the cutoff proves every later one is older too and the scan
//! stops there. The scan also stops after `limit` inspected repositories or
//! when the listing runs out.

mod error;
mod options;
mod outcome;
mod state;

pub use error::ScanError;
pub use options::ScanOptions;
pub use outcome::ScanOutcome;
pub use state::StopReason;

use crate::github::{GitHubError, RepositoryService, RepositorySummary};
use crate::owner::Owner;
use crate::summary::{ItemOutcome, RepositoryOutcome, ScanResult, SkipReason};
use chrono::{DateTime, Utc};
use state::ScanState;
use tracing::{debug, info, info_span, warn, Instrument};

/// Scans an owner's repositories and watches every qualifying one.
///
/// Write failures are recorded per repository and never stop the scan.
///
/// # Errors
///
/// Returns [`ScanError::Listing`] if a listing call fails. The scan stops at
/// that point and no partial tally is returned.
pub async fn scan<S>(
    service: &S,
    owner: &Owner,
    options: &ScanOptions,
) -> Result<ScanOutcome, ScanError>
where
    S: RepositoryService + ?Sized,
{
    let span = info_span!(
        "scan",
        owner = %owner.login,
        kind = %owner.kind,
        cutoff = %options.cutoff,
        limit = options.limit,
        dry_run = options.dry_run
    );

    async {
        info!("Starting repository scan");

        let mut scanner = Scanner::new(service, options);
        let per_page = options.page_size();
        let mut page = 1u32;

        while scanner.state.is_scanning() {
            if scanner.limit_reached() {
                scanner.stop(StopReason::LimitReached);
                break;
            }

            match service.list_repositories(owner, page, per_page).await {
                Ok(repositories) => {
                    debug!(page, count = repositories.len(), "Fetched page");
                    if !scanner.continues_ordering(&repositories) {
                        scanner.state = ScanState::Aborted(ScanError::Listing {
                            page,
                            source: GitHubError::UnsortedPage { page },
                        });
                        break;
                    }
                    scanner.inspect_page(&repositories).await;

                    if scanner.state.is_scanning() && repositories.len() < usize::from(per_page) {
                        scanner.stop(StopReason::Exhausted);
                    }
                    page += 1;
                }
                Err(source) => {
                    scanner.state = ScanState::Aborted(ScanError::Listing { page, source });
                }
            }
        }

        scanner.finish()
    }
    .instrument(span)
    .await
}

/// Mutable state of one scan.
struct Scanner<'a, S: ?Sized> {
    service: &'a S,
    options: &'a ScanOptions,
    state: ScanState,
    result: ScanResult,
    repositories: Vec<RepositoryOutcome>,
    /// Creation time of the last repository on the previous page.
    last_created_at: Option<DateTime<Utc>>,
}

impl<'a, S> Scanner<'a, S>
where
    S: RepositoryService + ?Sized,
{
    fn new(service: &'a S, options: &'a ScanOptions) -> Self {
        Self {
            service,
            options,
            state: ScanState::Scanning,
            result: ScanResult::new(),
            repositories: Vec::new(),
            last_created_at: None,
        }
    }

    /// Returns false if `repositories` starts newer than the previous page ended.
    ///
    /// The client only checks ordering within a page.
    fn continues_ordering(&mut self, repositories: &[RepositorySummary]) -> bool {
        if let (Some(previous), Some(first)) = (self.last_created_at, repositories.first()) {
            if first.created_at > previous {
                return false;
            }
        }
        if let Some(last) = repositories.last() {
            self.last_created_at = Some(last.created_at);
        }
        true
    }

    fn limit_reached(&self) -> bool {
        self.result.processed >= self.options.limit
    }

    fn stop(&mut self, reason: StopReason) {
        info!(
            reason = reason.as_str(),
            processed = self.result.processed,
            "Scan stopped"
        );
        self.state = ScanState::Stopped(reason);
    }

    async fn inspect_page(&mut self, repositories: &[RepositorySummary]) {
        for repository in repositories {
            if !self.state.is_scanning() {
                break;
            }
            if self.limit_reached() {
                self.stop(StopReason::LimitReached);
                break;
            }
            self.result.begin_item();
            let outcome = self.classify(repository).await;
            self.result.record(&outcome);
            self.repositories.push(RepositoryOutcome {
                repository: repository.full_name.clone(),
                outcome,
            });
        }
    }

    async fn classify(&mut self, repository: &RepositorySummary) -> ItemOutcome {
        let name = repository.full_name.as_str();

        // Archived repositories are skipped before the cutoff check, so an old
        // archived repository never ends the scan.
        if repository.archived && !self.options.include_archived {
            debug!(repo = %name, "Skipping archived repository");
            return ItemOutcome::Skipped {
                reason: SkipReason::Archived,
            };
        }

        if repository.created_at < self.options.cutoff {
            info!(
                repo = %name,
                created_at = %repository.created_at,
                "Reached repository older than cutoff"
            );
            self.stop(StopReason::CutoffReached);
            return ItemOutcome::BeyondCutoff;
        }

        if name.trim().is_empty() {
            warn!("Skipping repository without a name");
            return ItemOutcome::Skipped {
                reason: SkipReason::MissingName,
            };
        }

        if self.options.dry_run {
            info!(repo = %name, created_at = %repository.created_at, "[DRY RUN] Would watch");
            return ItemOutcome::WouldWatch;
        }

        match self.service.set_watch(name, true, false).await {
            Ok(()) => {
                info!(repo = %name, "Watching repository");
                ItemOutcome::Watched
            }
            Err(e) => {
                warn!(repo = %name, error = %e, "Failed to watch repository");
                ItemOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    fn finish(self) -> Result<ScanOutcome, ScanError> {
        match self.state {
            ScanState::Stopped(stop) => Ok(ScanOutcome {
                result: self.result,
                stop,
                repositories: self.repositories,
            }),
            ScanState::Aborted(error) => Err(error),
            // The loop only exits once the state has left `Scanning`.
            ScanState::Scanning => Ok(ScanOutcome {
                result: self.result,
                stop: StopReason::Exhausted,
                repositories: self.repositories,
            }),
        }
    }
}
