//! Scan tallies, per-repository outcomes and the final report.

mod report;
mod result;
mod scan_result;

pub use report::ScanReport;
pub use result::{ItemOutcome, RepositoryOutcome, SkipReason};
pub use scan_result::ScanResult;
