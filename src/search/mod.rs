//! Search Service Module
//!
//! Executes client queries against the in-memory problem index.
//!
//! ## Responsibilities
//! - **Validation**: queries must be 3 to 50 characters and exclusion sets at most 26 ids.
//!   Violations are rejected before the index is touched.
//! - **Retrieval**: case-insensitive substring match on problem names, minus the
//!   caller's exclusion set, capped at the index's result size.
//!
//! ## Submodules
//! - **`engine`**: validation and the search operation.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
