use crate::problems::types::ProblemView;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body of a search request. A missing body, missing field or `null`
/// all mean "exclude nothing". Elements are kept untyped: every one counts
/// toward the exclusion limit, but only strings can name an indexed id.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub problems: Option<Vec<Value>>,
}

impl SearchRequest {
    /// Number of elements sent, strings or not.
    pub fn excluded_len(&self) -> usize {
        self.problems.as_ref().map_or(0, Vec::len)
    }

    /// The string elements, the only ones that can match an index key.
    pub fn excluded(&self) -> Vec<&str> {
        self.problems
            .iter()
            .flatten()
            .filter_map(Value::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub list: Vec<ProblemView>,
}
