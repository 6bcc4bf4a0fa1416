//! Problem Records Module
//!
//! Everything that touches the backing store directly.
//!
//! ## Submodules
//! - **`types`**: The stored `Problem` document, its public `ProblemView` projection and
//!   the `ProblemFilter` used by scans.
//! - **`store`**: The `ProblemStore` contract and the in-memory `MemoryProblemStore`.
//! - **`handlers`**: The get-by-id fetcher and its HTTP handler.

pub mod handlers;
pub mod store;
pub mod types;
