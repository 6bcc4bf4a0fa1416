use super::engine::{search, validate};
use super::types::{SearchRequest, SearchResponse};
use crate::error::{ApiError, ApiResult};
use crate::index::store::IndexStore;

use axum::body::Bytes;
use axum::extract::Path;
use axum::{Extension, Json};
use std::sync::Arc;

/// `POST /problems/search/:query` with an optional `{"problems": [...]}` body.
pub async fn handle_search(
    Extension(index): Extension<Arc<IndexStore>>,
    Path(query): Path<String>,
    body: Bytes,
) -> ApiResult<Json<SearchResponse>> {
    let request = parse_request(&body)?;
    validate(&query, request.excluded_len())?;
    let excluded = request.excluded();

    search(&index, &query, &excluded).map(Json)
}

fn parse_request(body: &[u8]) -> ApiResult<SearchRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SearchRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| ApiError::Validation(e.to_string()))
}
