//! Scan state machine.

use super::ScanError;
use serde::Serialize;

/// Why a scan finished without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The listing returned a short or empty page.
    Exhausted,
    /// `limit` repositories were inspected.
    LimitReached,
    /// A repository older than the cutoff was reached.
    CutoffReached,
}

impl StopReason {
    /// Returns the reason as a string for logs and summaries.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exhausted => "no more repositories",
            Self::LimitReached => "limit reached",
            Self::CutoffReached => "cutoff reached",
        }
    }
}

/// Current state of a scan.
#[derive(Debug)]
pub(crate) enum ScanState {
    /// Still inspecting repositories.
    Scanning,
    /// Finished normally.
    Stopped(StopReason),
    /// Finished because a listing call failed.
    Aborted(ScanError),
}

impl ScanState {
    pub(crate) fn is_scanning(&self) -> bool {
        matches!(self, Self::Scanning)
    }
}
