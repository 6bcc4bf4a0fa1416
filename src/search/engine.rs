use super::types::SearchResponse;
use crate::error::{ApiError, ApiResult};
use crate::index::store::IndexStore;

/// Shortest accepted query, in UTF-16 code units.
pub const MIN_QUERY_LEN: usize = 3;
/// Longest accepted query, in UTF-16 code units.
pub const MAX_QUERY_LEN: usize = 50;
/// Largest accepted exclusion list, counting every element.
pub const MAX_EXCLUDED: usize = 26;

/// Query length as browser clients measure it: UTF-16 code units, so a character
/// outside the BMP counts twice.
pub fn query_len(query: &str) -> usize {
    query.encode_utf16().count()
}

/// Rejects queries outside `[MIN_QUERY_LEN, MAX_QUERY_LEN]` and exclusion lists
/// longer than `MAX_EXCLUDED`.
pub fn validate(query: &str, excluded_len: usize) -> ApiResult<()> {
    let len = query_len(query);
    if !(MIN_QUERY_LEN..=MAX_QUERY_LEN).contains(&len) {
        return Err(ApiError::Validation(format!(
            "query length {} outside [{}, {}]",
            len, MIN_QUERY_LEN, MAX_QUERY_LEN
        )));
    }

    if excluded_len > MAX_EXCLUDED {
        return Err(ApiError::Validation(format!(
            "{} excluded problems, at most {} allowed",
            excluded_len, MAX_EXCLUDED
        )));
    }

    Ok(())
}

/// Validates the request, then returns the matching indexed problems.
pub fn search<S: AsRef<str>>(
    index: &IndexStore,
    query: &str,
    excluded: &[S],
) -> ApiResult<SearchResponse> {
    validate(query, excluded.len())?;

    let list = index.matches(query, excluded);
    tracing::debug!(
        "Search '{}' (excluding {}) returned {} problems",
        query,
        excluded.len(),
        list.len()
    );

    Ok(SearchResponse { list })
}
