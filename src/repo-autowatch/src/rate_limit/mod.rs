//! Rate limit checks for the GitHub core API.
//!
//! The listing and subscription endpoints share the core REST budget. A scan
//! reads that budget up front and warns when it looks too small; it never
//! waits or retries.

mod info;

pub use info::RateLimitInfo;

use octocrab::Octocrab;
use tracing::{debug, warn};

/// Checks the current rate limit status for core API (listings, subscriptions, etc.).
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: u32::try_from(core.remaining).unwrap_or(u32::MAX),
        reset: core.reset,
        limit: u32::try_from(core.limit).unwrap_or(u32::MAX),
    })
}

/// Logs a warning when `info` cannot cover `needed` requests.
///
/// Returns true if the budget is sufficient.
pub fn warn_if_insufficient(info: &RateLimitInfo, needed: usize) -> bool {
    if info.covers(needed) {
        debug!(
            remaining = info.remaining,
            limit = info.limit,
            needed,
            "Rate limit budget is sufficient"
        );
        return true;
    }

    let reset_at = info
        .reset_at()
        .map_or_else(|| info.reset.to_string(), |at| at.to_rfc3339());
    warn!(
        remaining = info.remaining,
        limit = info.limit,
        needed,
        reset_at = %reset_at,
        "Rate limit budget may run out before the scan completes"
    );
    false
}

/// Reads the core budget and warns when it cannot cover `needed` requests.
///
/// A failed budget lookup is logged and otherwise ignored.
pub async fn ensure_core_budget(octocrab: &Octocrab, needed: usize) {
    match check_core_rate_limit(octocrab).await {
        Ok(info) => {
            warn_if_insufficient(&info, needed);
        }
        Err(e) => {
            warn!(error = %e, "Failed to read rate limit, continuing");
        }
    }
}
