//! Problem Index Service Library
//!
//! This library crate defines the modules behind the problem search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of loosely coupled subsystems:
//!
//! - **`problems`**: The problem data model, the backing store contract (`ProblemStore`)
//!   with an in-memory implementation, and the get-by-id fetcher.
//! - **`index`**: The in-memory searchable index. Append-only, idempotent, keyed by
//!   problem id, plus the membership check used to validate id sets.
//! - **`refresh`**: The recurring background task that scans the store once at startup
//!   and then daily, adding every imported problem to the index exactly once.
//! - **`search`**: Boundary validation and substring search with exclusion sets.
//! - **`api`**: The axum router wiring the operations above to HTTP endpoints.

pub mod api;
pub mod config;
pub mod error;
pub mod index;
pub mod problems;
pub mod refresh;
pub mod search;
