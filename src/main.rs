use clap::Parser;
use problem_index::api;
use problem_index::config::Config;
use problem_index::index::store::IndexStore;
use problem_index::problems::store::{MemoryProblemStore, SharedProblemStore};
use problem_index::refresh::refresher::Refresher;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let refresher_config = config.refresher_config()?;

    // 1. Backing store:
    let store: SharedProblemStore = match &config.store {
        Some(path) => Arc::new(MemoryProblemStore::from_json_file(path)?),
        None => {
            tracing::warn!("No --store given, starting with an empty problem store");
            Arc::new(MemoryProblemStore::new())
        }
    };

    // 2. Index:
    let index = Arc::new(IndexStore::with_result_cap(config.result_cap));
    tracing::info!("Search results capped at {}", index.result_cap());

    // 3. Refresher (indexes immediately unless --no-run-on-init):
    let refresher = Refresher::new(store.clone(), index.clone(), refresher_config);
    let mut refresher_handle = refresher.clone().start();

    // 4. HTTP Router:
    let app = api::router(index, store, refresher);

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    refresher_handle.stop().await;

    Ok(())
}
