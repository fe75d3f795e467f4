//! Final scan report.

use super::{ItemOutcome, RepositoryOutcome, ScanResult, SkipReason};
use crate::owner::Owner;
use crate::scanner::{ScanOptions, ScanOutcome, StopReason};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything a caller needs to print or serialise after a run.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Authenticated login that issued the write calls.
    pub viewer: String,

    /// Scanned owner.
    pub owner: Owner,

    /// Repositories created before this instant were not watched.
    pub cutoff: DateTime<Utc>,

    /// Maximum number of repositories inspected.
    pub limit: usize,

    /// Whether archived repositories were eligible.
    pub include_archived: bool,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Why the scan stopped.
    pub stop: StopReason,

    /// Final tally.
    pub result: ScanResult,

    /// Outcome of every inspected repository, newest first.
    pub repositories: Vec<RepositoryOutcome>,
}

impl ScanReport {
    /// Combines the scan inputs with its outcome.
    #[must_use]
    pub fn new(viewer: String, owner: Owner, options: &ScanOptions, outcome: ScanOutcome) -> Self {
        Self {
            viewer,
            owner,
            cutoff: options.cutoff,
            limit: options.limit,
            include_archived: options.include_archived,
            dry_run: options.dry_run,
            stop: outcome.stop,
            result: outcome.result,
            repositories: outcome.repositories,
        }
    }

    /// Returns true if any write call failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.result.has_failures()
    }

    /// Returns true if no write call failed.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.result.all_success()
    }

    /// Skipped repositories with their reasons, in listing order.
    pub fn skipped(&self) -> impl Iterator<Item = (&str, SkipReason)> + '_ {
        self.repositories.iter().filter_map(|item| match item.outcome {
            ItemOutcome::Skipped { reason } => Some((item.repository.as_str(), reason)),
            _ => None,
        })
    }

    /// Human-readable summary, one line per entry.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let result = &self.result;
        let mut lines = vec![
            "Summary:".to_string(),
            format!("  Mode: {}", if self.dry_run { "Dry Run" } else { "Live" }),
            format!("  Owner: {}", self.owner),
            format!("  Cutoff: {}", self.cutoff.to_rfc3339()),
            format!("  Stopped: {}", self.stop.as_str()),
            format!("  Repositories processed: {}", result.processed),
        ];

        if self.dry_run {
            lines.push(format!("  Would watch: {}", result.would_watch));
        } else {
            lines.push(format!("  Watched: {}", result.watched));
            lines.push(format!("  Failed: {}", result.failed));
        }
        lines.push(format!("  Skipped: {}", result.skipped));
        for (repository, reason) in self.skipped() {
            let name = if repository.is_empty() { "<unnamed>" } else { repository };
            lines.push(format!("    {name}: {}", reason.as_str()));
        }
        lines.push(format!("  Beyond cutoff: {}", result.beyond_cutoff));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::OwnerKind;
    use chrono::TimeZone;

    fn report(dry_run: bool) -> ScanReport {
        let outcomes = [
            ("acme/new", ItemOutcome::Watched),
            (
                "acme/frozen",
                ItemOutcome::Skipped {
                    reason: SkipReason::Archived,
                },
            ),
            (
                "",
                ItemOutcome::Skipped {
                    reason: SkipReason::MissingName,
                },
            ),
            ("acme/old", ItemOutcome::BeyondCutoff),
        ];
        let mut result = ScanResult::new();
        let repositories = outcomes
            .into_iter()
            .map(|(name, outcome)| {
                result.begin_item();
                result.record(&outcome);
                RepositoryOutcome {
                    repository: name.to_string(),
                    outcome,
                }
            })
            .collect();

        let cutoff = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let options = ScanOptions::new(cutoff, 10).with_dry_run(dry_run);
        let outcome = ScanOutcome {
            result,
            stop: StopReason::CutoffReached,
            repositories,
        };
        ScanReport::new(
            "octo".to_string(),
            Owner::new("acme", OwnerKind::Organization),
            &options,
            outcome,
        )
    }

    #[test]
    fn lists_skipped_repositories_with_reasons() {
        let report = report(false);

        let skipped: Vec<_> = report.skipped().collect();

        assert_eq!(
            skipped,
            vec![
                ("acme/frozen", SkipReason::Archived),
                ("", SkipReason::MissingName)
            ]
        );
        assert!(report.all_success());
    }

    #[test]
    fn summary_accounts_for_every_processed_repository() {
        let report = report(false);

        let lines = report.summary_lines();

        assert!(lines.contains(&"  Repositories processed: 4".to_string()));
        assert!(lines.contains(&"  Watched: 1".to_string()));
        assert!(lines.contains(&"  Skipped: 2".to_string()));
        assert!(lines.contains(&"    acme/frozen: archived".to_string()));
        assert!(lines.contains(&"    <unnamed>: missing name".to_string()));
        assert!(lines.contains(&"  Beyond cutoff: 1".to_string()));
        assert_eq!(report.result.classified(), report.result.processed);
    }

    #[test]
    fn dry_run_summary_reports_would_watch() {
        let lines = report(true).summary_lines();

        assert!(lines.contains(&"  Mode: Dry Run".to_string()));
        assert!(lines.contains(&"  Would watch: 0".to_string()));
        assert!(!lines.iter().any(|line| line.starts_with("  Watched")));
    }
}
