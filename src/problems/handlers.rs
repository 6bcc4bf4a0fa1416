use super::store::{ProblemStore, SharedProblemStore};
use super::types::ProblemView;
use crate::error::{ApiError, ApiResult};

use axum::extract::Path;
use axum::{Extension, Json};

/// Fetches a single problem and projects it to the public field whitelist.
pub async fn get(store: &dyn ProblemStore, id: &str) -> ApiResult<ProblemView> {
    match store.find_by_id(id).await? {
        Some(problem) => Ok(ProblemView::from(&problem)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn handle_get_problem(
    Extension(store): Extension<SharedProblemStore>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProblemView>> {
    tracing::debug!("Fetching problem {}", id);
    get(store.as_ref(), &id).await.map(Json)
}
