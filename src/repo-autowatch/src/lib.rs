#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod cutoff;
pub mod github;
pub mod owner;
pub mod rate_limit;
pub mod runner;
pub mod scanner;
pub mod summary;

pub use config::{load_settings, ConfigError, Settings, CONFIG_ENV};
pub use cutoff::{cutoff_from_days, parse_since, resolve_cutoff, CutoffError, DEFAULT_DAYS};
pub use github::{GitHubClient, GitHubError, RepositoryService, RepositorySummary, MAX_PAGE_SIZE};
pub use owner::{resolve_owner, Owner, OwnerKind, ParseOwnerKindError};
pub use rate_limit::{
    check_core_rate_limit, ensure_core_budget, warn_if_insufficient, RateLimitInfo,
};
pub use runner::{
    execute, resolve_token, token_from_env, Runner, RunnerConfig, RunnerError, DEFAULT_LIMIT,
    TOKEN_ENV_VARS,
};
pub use scanner::{scan, ScanError, ScanOptions, ScanOutcome, StopReason};
pub use summary::{ItemOutcome, RepositoryOutcome, ScanReport, ScanResult, SkipReason};
