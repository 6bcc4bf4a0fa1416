//! Problem Data Types
//!
//! JSON field names follow the document-store layout (`_id`, camelCase fields),
//! so seed files and API responses share the same shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A competitive-programming problem as stored in the backing store.
///
/// Only `id`, `name` and `imported` drive indexing. The remaining fields are
/// descriptive and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Store-wide unique identifier. The index key.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Problem code within its online judge (e.g. "1000").
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub oj_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub imported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timelimit: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memorylimit: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    #[serde(default)]
    pub is_pdf: bool,
    /// Any other stored fields (statements, tags, ...). Never projected.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Problem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, imported: bool) -> Self {
        Self {
            id: id.into(),
            oj_id: None,
            name: name.into(),
            imported,
            oj: None,
            url: None,
            original_url: None,
            source: None,
            timelimit: None,
            memorylimit: None,
            input_file: None,
            output_file: None,
            is_pdf: false,
            extra: Map::new(),
        }
    }
}

/// Whitelisted projection of a `Problem`.
///
/// This is the body of the get-by-id endpoint and the shape of every search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemView {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub oj_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timelimit: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memorylimit: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    pub imported: bool,
    pub is_pdf: bool,
}

impl From<&Problem> for ProblemView {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id.clone(),
            oj_id: problem.oj_id.clone(),
            name: problem.name.clone(),
            oj: problem.oj.clone(),
            url: problem.url.clone(),
            original_url: problem.original_url.clone(),
            source: problem.source.clone(),
            timelimit: problem.timelimit.clone(),
            memorylimit: problem.memorylimit.clone(),
            input_file: problem.input_file.clone(),
            output_file: problem.output_file.clone(),
            imported: problem.imported,
            is_pdf: problem.is_pdf,
        }
    }
}

/// Query filter accepted by `ProblemStore::find`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProblemFilter {
    /// `{}`: every record.
    #[default]
    All,
    /// `{ imported: true }`
    Imported,
}

impl ProblemFilter {
    pub fn matches(&self, problem: &Problem) -> bool {
        match self {
            ProblemFilter::All => true,
            ProblemFilter::Imported => problem.imported,
        }
    }
}
