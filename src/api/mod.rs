//! HTTP API
//!
//! Routes:
//! - `POST /problems/search/:query`: substring search with an optional exclusion body.
//! - `GET /problems/:id`: single problem, projected to the public field whitelist.
//! - `GET /status`: index size and refresher stats.
//!
//! A panic inside any handler is caught at the router boundary, logged, and
//! answered with a bare 500 like every other internal failure.

use crate::error::ApiError;
use crate::index::store::IndexStore;
use crate::problems::handlers::handle_get_problem;
use crate::problems::store::SharedProblemStore;
use crate::refresh::refresher::Refresher;
use crate::refresh::types::RefreshStats;
use crate::search::handlers::handle_search;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub indexed: usize,
    pub refresh: RefreshStats,
}

pub fn router(
    index: Arc<IndexStore>,
    store: SharedProblemStore,
    refresher: Arc<Refresher>,
) -> Router {
    Router::new()
        .route("/problems/search/:query", post(handle_search))
        .route("/problems/:id", get(handle_get_problem))
        .route("/status", get(handle_status))
        .layer(Extension(index))
        .layer(Extension(store))
        .layer(Extension(refresher))
        .layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Internal(detail).into_response()
}

async fn handle_status(
    Extension(index): Extension<Arc<IndexStore>>,
    Extension(refresher): Extension<Arc<Refresher>>,
) -> Json<StatusResponse> {
    Json(StatusResponse {
        indexed: index.len(),
        refresh: refresher.stats(),
    })
}
