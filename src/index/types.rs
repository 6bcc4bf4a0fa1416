use crate::problems::types::ProblemView;

/// Immutable, searchable representation of one indexed problem.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub id: String,
    /// Case-folded name used for substring matching.
    pub folded_name: String,
    /// What a search hit returns.
    pub view: ProblemView,
}

impl IndexEntry {
    pub fn new(view: ProblemView) -> Self {
        Self {
            id: view.id.clone(),
            folded_name: fold_case(&view.name),
            view,
        }
    }

    pub fn matches(&self, folded_needle: &str) -> bool {
        self.folded_name.contains(folded_needle)
    }
}

/// Matching is case-insensitive: names and queries are both lowercased.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}
