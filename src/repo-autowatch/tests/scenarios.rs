use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use repo_autowatch::{
    execute, load_settings, ConfigError, GitHubError, Owner, OwnerKind, RepositoryService,
    RepositorySummary, RunnerConfig, StopReason,
};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

/// In-memory organization with a newest-first repository list.
struct Organization {
    repositories: Vec<RepositorySummary>,
    broken: Option<&'static str>,
    writes: Mutex<Vec<String>>,
}

impl Organization {
    fn new(repositories: Vec<RepositorySummary>) -> Self {
        Self {
            repositories,
            broken: None,
            writes: Mutex::new(Vec::new()),
        }
    }

    fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepositoryService for Organization {
    async fn authenticated_login(&self) -> Result<String, GitHubError> {
        Ok("octo".to_string())
    }

    async fn resolve_owner_kind(&self, _login: &str) -> Result<OwnerKind, GitHubError> {
        Ok(OwnerKind::Organization)
    }

    async fn list_repositories(
        &self,
        _owner: &Owner,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, GitHubError> {
        let start = (page as usize - 1) * usize::from(per_page);
        Ok(self
            .repositories
            .iter()
            .skip(start)
            .take(usize::from(per_page))
            .cloned()
            .collect())
    }

    async fn set_watch(
        &self,
        full_name: &str,
        _subscribed: bool,
        _ignored: bool,
    ) -> Result<(), GitHubError> {
        self.writes.lock().unwrap().push(full_name.to_string());
        if self.broken == Some(full_name) {
            return Err(GitHubError::SubscriptionNotApplied {
                full_name: full_name.to_string(),
            });
        }
        Ok(())
    }
}

/// Repositories created `days_ago` days before [`now`], in the given order.
fn repositories(days_ago: &[i64]) -> Vec<RepositorySummary> {
    days_ago
        .iter()
        .enumerate()
        .map(|(i, days)| RepositorySummary::new(format!("acme/repo-{i}"), now() - TimeDelta::days(*days)))
        .collect()
}

fn config(limit: usize) -> RunnerConfig {
    RunnerConfig::new("token".to_string())
        .with_owner("acme")
        .with_days(30)
        .with_limit(limit)
}

#[tokio::test]
async fn all_recent_repositories_are_watched() {
    let org = Organization::new(repositories(&[1, 2, 3]));
    let config = config(10);
    let options = config.scan_options(now()).unwrap();

    let report = execute(&org, &config, "octo".to_string(), options).await.unwrap();

    assert_eq!(report.result.processed, 3);
    assert_eq!(report.result.watched, 3);
    assert_eq!(report.result.skipped, 0);
    assert_eq!(report.result.failed, 0);
    assert_eq!(report.owner.kind, OwnerKind::Organization);
    assert!(!report.has_failures());
}

#[tokio::test]
async fn scan_stops_at_cutoff() {
    let org = Organization::new(repositories(&[1, 5, 40, 50, 60]));
    let config = config(10);
    let options = config.scan_options(now()).unwrap();

    let report = execute(&org, &config, "octo".to_string(), options).await.unwrap();

    assert_eq!(report.stop, StopReason::CutoffReached);
    assert_eq!(report.result.processed, 3);
    assert_eq!(report.result.watched, 2);
    assert_eq!(report.result.beyond_cutoff, 1);
    assert_eq!(org.writes(), vec!["acme/repo-0", "acme/repo-1"]);
}

#[tokio::test]
async fn scan_stops_at_limit() {
    let org = Organization::new(repositories(&[1, 2, 3, 4, 5]));
    let config = config(2);
    let options = config.scan_options(now()).unwrap();

    let report = execute(&org, &config, "octo".to_string(), options).await.unwrap();

    assert_eq!(report.stop, StopReason::LimitReached);
    assert_eq!(report.result.processed, 2);
    assert_eq!(org.writes().len(), 2);
}

#[tokio::test]
async fn single_write_failure_fails_the_run() {
    let mut org = Organization::new(repositories(&[1, 2, 3]));
    org.broken = Some("acme/repo-1");
    let config = config(10);
    let options = config.scan_options(now()).unwrap();

    let report = execute(&org, &config, "octo".to_string(), options).await.unwrap();

    assert_eq!(report.result.watched, 2);
    assert_eq!(report.result.failed, 1);
    assert!(report.has_failures());
    assert_eq!(org.writes().len(), 3);
}

#[tokio::test]
async fn report_serializes_to_json() {
    let org = Organization::new(repositories(&[1]));
    let config = config(10).with_dry_run(true);
    let options = config.scan_options(now()).unwrap();

    let report = execute(&org, &config, "octo".to_string(), options).await.unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["dry_run"], true);
    assert_eq!(value["stop"], "exhausted");
    assert_eq!(value["result"]["would_watch"], 1);
    assert_eq!(value["owner"]["kind"], "organization");
    assert_eq!(value["repositories"][0]["status"], "would_watch");
    assert!(org.writes().is_empty());
}

#[test]
fn settings_fixture_configures_a_dry_run() {
    let settings = load_settings(&fixtures_root().join("autowatch.toml")).unwrap();
    let config = RunnerConfig::new("token".to_string()).with_settings(settings);

    let options = config.scan_options(now()).unwrap();

    assert_eq!(config.owner(), Some("acme"));
    assert_eq!(config.owner_kind(), Some(OwnerKind::Organization));
    assert_eq!(options.limit, 25);
    assert!(options.dry_run);
    assert_eq!(options.cutoff, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn broken_settings_fixture_is_rejected() {
    let result = load_settings(&fixtures_root().join("broken.toml"));

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
