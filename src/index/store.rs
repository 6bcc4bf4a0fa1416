//! Index Store
//!
//! Append-only map from problem id to `IndexEntry`.
//!
//! Membership lives in a `DashSet` so `contains` never waits on the search list.
//! Writers serialize on the `entries` write lock and publish the membership bit only
//! after the entry is pushed, so `contains(id) == true` always implies the entry exists.

use super::types::{fold_case, IndexEntry};
use crate::problems::types::ProblemView;

use dashmap::DashSet;
use parking_lot::RwLock;
use std::collections::HashSet;

/// Maximum number of hits returned by `matches` unless configured otherwise.
pub const DEFAULT_RESULT_CAP: usize = 10;

pub struct IndexStore {
    members: DashSet<String>,
    entries: RwLock<Vec<IndexEntry>>,
    result_cap: usize,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::with_result_cap(DEFAULT_RESULT_CAP)
    }

    pub fn with_result_cap(result_cap: usize) -> Self {
        Self {
            members: DashSet::new(),
            entries: RwLock::new(Vec::new()),
            result_cap,
        }
    }

    pub fn result_cap(&self) -> usize {
        self.result_cap
    }

    /// O(1) membership test.
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Indexes `view` unless its id is already present.
    ///
    /// Returns `true` if this call created the entry. Entries are never replaced,
    /// so a second call with the same id is a no-op even if the name changed.
    pub fn add(&self, view: ProblemView) -> bool {
        let mut entries = self.entries.write();
        if self.members.contains(&view.id) {
            return false;
        }

        let id = view.id.clone();
        entries.push(IndexEntry::new(view));
        self.members.insert(id);
        true
    }

    /// Returns indexed problems whose name contains `substring` (case-insensitive),
    /// skipping ids in `excluded`, in insertion order, truncated to the result cap.
    pub fn matches<S: AsRef<str>>(&self, substring: &str, excluded: &[S]) -> Vec<ProblemView> {
        let needle = fold_case(substring);
        let excluded: HashSet<&str> = excluded.iter().map(|id| id.as_ref()).collect();

        let entries = self.entries.read();
        entries
            .iter()
            .filter(|entry| !excluded.contains(entry.id.as_str()))
            .filter(|entry| entry.matches(&needle))
            .take(self.result_cap)
            .map(|entry| entry.view.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for IndexStore {
    fn default() -> Self {
        Self::new()
    }
}
