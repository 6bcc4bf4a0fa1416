//! Index Refresh Module
//!
//! Background population of the problem index.
//!
//! ## Overview
//! The index is never written by request handlers. A single `Refresher` scans the
//! backing store on a fixed daily schedule (and once at startup) and adds every
//! imported problem that is not indexed yet. Failed scans are logged, counted in
//! `RefreshStats` and retried on the next tick.
//!
//! ## Submodules
//! - **`refresher`**: tick logic, the recurring loop and its stop handle.
//! - **`schedule`**: daily cron-style fire times and the injectable `Clock`.
//! - **`types`**: tick outcomes and the stats snapshot.

pub mod refresher;
pub mod schedule;
pub mod types;
