//! Backing Store Contract
//!
//! The index never owns problem data. It reads it through `ProblemStore`, which is
//! the `find(filter)` / `findById(id)` contract of the document store.
//! `MemoryProblemStore` is the in-process implementation used by the binary and tests.

use super::types::{Problem, ProblemFilter};
use crate::error::StoreError;

use async_trait::async_trait;
use dashmap::DashMap;
use std::path::Path;
use std::sync::Arc;

pub type SharedProblemStore = Arc<dyn ProblemStore>;

#[async_trait]
pub trait ProblemStore: Send + Sync + 'static {
    /// Returns every record matching `filter`.
    async fn find(&self, filter: ProblemFilter) -> Result<Vec<Problem>, StoreError>;

    /// Returns the record with the given `_id`, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Problem>, StoreError>;
}

/// Problem records held in a concurrent map.
///
/// `find` returns records ordered by id so that a fixed store state always yields
/// the same scan order.
#[derive(Default)]
pub struct MemoryProblemStore {
    records: DashMap<String, Problem>,
}

impl MemoryProblemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_problems(problems: impl IntoIterator<Item = Problem>) -> Self {
        let store = Self::new();
        for problem in problems {
            store.upsert(problem);
        }
        store
    }

    /// Loads a JSON array of problem documents.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let problems: Vec<Problem> = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} problems from {}",
            problems.len(),
            path.as_ref().display()
        );
        Ok(Self::with_problems(problems))
    }

    /// Inserts or replaces a record, keyed by its `_id`.
    pub fn upsert(&self, problem: Problem) {
        self.records.insert(problem.id.clone(), problem);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ProblemStore for MemoryProblemStore {
    async fn find(&self, filter: ProblemFilter) -> Result<Vec<Problem>, StoreError> {
        let mut problems: Vec<Problem> = self
            .records
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        problems.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(problems)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Problem>, StoreError> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }
}
