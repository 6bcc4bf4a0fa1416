//! Command-line and environment configuration for the service binary.

use crate::index::store::DEFAULT_RESULT_CAP;
use crate::refresh::refresher::RefresherConfig;
use crate::refresh::schedule::{DailySchedule, ScheduleError, DEFAULT_CRON, DEFAULT_UTC_OFFSET};

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "problem-index")]
#[command(about = "In-memory problem search index with daily refresh")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "PROBLEM_INDEX_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// JSON file with the problem documents backing the index
    #[arg(long, env = "PROBLEM_INDEX_STORE")]
    pub store: Option<PathBuf>,

    /// Maximum number of problems returned by a search
    #[arg(long, default_value_t = DEFAULT_RESULT_CAP)]
    pub result_cap: usize,

    /// Refresh schedule as "sec min hour * * *"
    #[arg(long, default_value = DEFAULT_CRON)]
    pub refresh_cron: String,

    /// UTC offset the refresh schedule is evaluated in (America/Recife by default)
    #[arg(long, default_value = DEFAULT_UTC_OFFSET, allow_hyphen_values = true)]
    pub refresh_utc_offset: String,

    /// Seconds a store scan may take before the tick is abandoned
    #[arg(long, default_value_t = 60)]
    pub fetch_timeout_secs: u64,

    /// Do not index immediately at startup, wait for the first scheduled tick
    #[arg(long)]
    pub no_run_on_init: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Config {
    pub fn refresher_config(&self) -> Result<RefresherConfig, ScheduleError> {
        Ok(RefresherConfig {
            schedule: DailySchedule::parse(&self.refresh_cron, &self.refresh_utc_offset)?,
            fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
            run_on_init: !self.no_run_on_init,
        })
    }
}
