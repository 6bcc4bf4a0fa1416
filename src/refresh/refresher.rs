//! Index Refresher
//!
//! Keeps the `IndexStore` eventually consistent with the backing store through a
//! recurring full scan.
//!
//! ## Tick Protocol
//! 1. Fetch every record with `ProblemFilter::All`, bounded by `fetch_timeout`.
//! 2. Walk the records in order, skipping malformed, non-imported and already
//!    indexed ones, and add the rest.
//! 3. Record the outcome in `RefreshStats` and log it.
//!
//! Ticks never overlap: a tick that starts while another is running is skipped,
//! since the next full scan catches up anyway.

use super::schedule::{Clock, DailySchedule, SystemClock};
use super::types::{RefreshStats, TickOutcome, TickSummary};
use crate::error::StoreError;
use crate::index::store::IndexStore;
use crate::problems::store::SharedProblemStore;
use crate::problems::types::{ProblemFilter, ProblemView};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Upper bound on a single store scan.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct RefresherConfig {
    pub schedule: DailySchedule,
    pub fetch_timeout: Duration,
    /// Run one tick as soon as the refresher starts.
    pub run_on_init: bool,
}

impl Default for RefresherConfig {
    fn default() -> Self {
        Self {
            schedule: DailySchedule::default(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            run_on_init: true,
        }
    }
}

pub struct Refresher {
    store: SharedProblemStore,
    index: Arc<IndexStore>,
    clock: Arc<dyn Clock>,
    config: RefresherConfig,
    running: AtomicBool,
    stats: Mutex<RefreshStats>,
}

/// Clears the `running` flag even if the tick future is dropped mid-scan.
struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Refresher {
    pub fn new(
        store: SharedProblemStore,
        index: Arc<IndexStore>,
        config: RefresherConfig,
    ) -> Arc<Self> {
        Self::with_clock(store, index, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        store: SharedProblemStore,
        index: Arc<IndexStore>,
        config: RefresherConfig,
        clock: Arc<dyn Clock>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store,
            index,
            clock,
            config,
            running: AtomicBool::new(false),
            stats: Mutex::new(RefreshStats::default()),
        })
    }

    pub fn config(&self) -> &RefresherConfig {
        &self.config
    }

    pub fn stats(&self) -> RefreshStats {
        self.stats.lock().clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Runs one scan now. Never returns an error: failures are logged and recorded
    /// in `stats()`, and the index keeps whatever earlier ticks added.
    pub async fn run_tick(&self) -> TickOutcome {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Problem indexing already in progress, skipping tick");
            self.stats.lock().ticks_skipped += 1;
            return TickOutcome::Skipped;
        }
        let _guard = RunningGuard(&self.running);

        match self.scan().await {
            Ok(summary) => {
                tracing::info!(
                    "Finished indexing problems: {} new, {} already indexed, {} not imported, {} rejected ({} total indexed)",
                    summary.indexed,
                    summary.already_indexed,
                    summary.not_imported,
                    summary.rejected,
                    self.index.len()
                );

                let mut stats = self.stats.lock();
                stats.ticks_completed += 1;
                stats.total_indexed += summary.indexed as u64;
                stats.last_completed_at = Some(self.clock.now());
                TickOutcome::Completed(summary)
            }
            Err(e) => {
                tracing::error!("Problem indexing failed: {}", e);

                let mut stats = self.stats.lock();
                stats.ticks_failed += 1;
                stats.last_error = Some(e.to_string());
                TickOutcome::Failed(e.to_string())
            }
        }
    }

    async fn scan(&self) -> Result<TickSummary, StoreError> {
        let timeout = self.config.fetch_timeout;
        let problems = tokio::time::timeout(timeout, self.store.find(ProblemFilter::All))
            .await
            .map_err(|_| StoreError::Timeout(timeout))??;

        let mut summary = TickSummary {
            scanned: problems.len(),
            ..TickSummary::default()
        };

        for problem in problems {
            if problem.id.is_empty() {
                tracing::warn!("Skipping problem without id (name: '{}')", problem.name);
                summary.rejected += 1;
                continue;
            }
            if !problem.imported {
                summary.not_imported += 1;
                continue;
            }
            if self.index.contains(&problem.id) {
                summary.already_indexed += 1;
                continue;
            }

            if self.index.add(ProblemView::from(&problem)) {
                tracing::debug!("Indexed problem {} '{}'", problem.id, problem.name);
                summary.indexed += 1;
            } else {
                summary.already_indexed += 1;
            }

            // Large scans must not starve request handlers on the same worker.
            tokio::task::yield_now().await;
        }

        Ok(summary)
    }

    /// Spawns the recurring loop: one tick immediately if `run_on_init`, then one at
    /// every fire time of the schedule. Dropping the returned handle stops the loop.
    pub fn start(self: Arc<Self>) -> RefresherHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let refresher = self;

        let task = tokio::spawn(async move {
            let schedule = refresher.config.schedule;
            let mut pending_init = refresher.config.run_on_init;
            let mut last_fire: Option<DateTime<Utc>> = None;

            tracing::info!(
                "Problem refresher started (daily at {} UTC{}, run on init: {})",
                schedule.time(),
                schedule.offset(),
                pending_init
            );

            loop {
                let wait = if pending_init {
                    Duration::ZERO
                } else {
                    let now = refresher.clock.now();
                    let next = schedule.next_fire(now, last_fire);
                    last_fire = Some(next);
                    tracing::info!("Next problem indexing at {}", next);
                    (next - now).to_std().unwrap_or(Duration::ZERO)
                };
                pending_init = false;

                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = async {
                        tokio::time::sleep(wait).await;
                        refresher.run_tick().await;
                    } => {}
                }
            }

            tracing::info!("Problem refresher stopped");
        });

        RefresherHandle {
            shutdown_tx,
            task: Some(task),
        }
    }
}

/// Cancel handle for a running refresher loop.
pub struct RefresherHandle {
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl RefresherHandle {
    /// Signals the loop to stop and waits for it. An in-flight tick is dropped;
    /// entries it already added stay in the index.
    pub async fn stop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Problem refresher task ended abnormally: {}", e);
            }
        }
    }

    /// True once the loop task has exited or been awaited by `stop`.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for RefresherHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}
