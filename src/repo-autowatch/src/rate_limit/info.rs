//! Rate limit information.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Rate limit information for a specific resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Returns true if at least `needed` requests remain.
    #[must_use]
    pub fn covers(&self, needed: usize) -> bool {
        usize::try_from(self.remaining).map_or(true, |remaining| remaining >= needed)
    }

    /// Returns the reset time as a UTC instant.
    #[must_use]
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.reset)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rate_limit_info() {
        let info = RateLimitInfo {
            remaining: 10,
            reset: 1_700_000_000,
            limit: 5000,
        };

        assert!(info.covers(10));
        assert!(!info.covers(11));
        assert_eq!(
            info.reset_at(),
            Some(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap())
        );
    }
}
