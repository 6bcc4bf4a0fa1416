//! Problem Index Module
//!
//! The in-memory index searched by clients. It is fully rebuildable from the backing
//! store, so nothing here is persisted.
//!
//! ## Core Concepts
//! - **Membership**: the set of indexed ids. An id is a member iff it has an entry.
//! - **Entries**: immutable, written once by the refresher, never updated or evicted.
//! - **Matching**: case-insensitive substring containment on the problem name.
//!
//! ## Submodules
//! - **`store`**: `IndexStore`, the concurrent membership set plus search list.
//! - **`types`**: `IndexEntry` and case folding.
//! - **`membership`**: `is_indexed`, the id-list validation helper.

pub mod membership;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
