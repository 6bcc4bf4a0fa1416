use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counters for one completed scan of the backing store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSummary {
    /// Records seen in the scan.
    pub scanned: usize,
    /// Entries created by this tick.
    pub indexed: usize,
    /// Imported records that were already indexed.
    pub already_indexed: usize,
    /// Records with `imported == false`.
    pub not_imported: usize,
    /// Malformed records (empty id).
    pub rejected: usize,
}

/// Result of a single `Refresher::run_tick` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Completed(TickSummary),
    /// The store fetch failed or timed out. The index was left as it was.
    Failed(String),
    /// Another tick was still running.
    Skipped,
}

/// Observable history of the refresher. Failures never reach a caller, so this
/// is where they show up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshStats {
    pub ticks_completed: u64,
    pub ticks_failed: u64,
    pub ticks_skipped: u64,
    pub total_indexed: u64,
    pub last_error: Option<String>,
    pub last_completed_at: Option<DateTime<Utc>>,
}
